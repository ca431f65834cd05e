//! Build-time configuration supplied by the host.
//!
//! Values arrive as flat `build_properties.<Name>` pairs, the same shape an
//! MSBuild analyzer config exposes. Missing or blank values fall back to the
//! documented defaults.

use std::collections::BTreeMap;

use crate::{error::Error, locale::parse_language, types::NullableState};

pub const NAMESPACE_BUILD_PROPERTY: &str = "build_properties.RootNamespace";
pub const DEFAULT_LANGUAGE_BUILD_PROPERTY: &str = "build_properties.DefaultLanguage";
pub const PROJECT_DIRECTORY_BUILD_PROPERTY: &str = "build_properties.ProjectDir";
pub const NULLABLE_BUILD_PROPERTY: &str = "build_properties.Nullable";

pub const DEFAULT_NAMESPACE: &str = "GeneratedResources";
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Ordered build property map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProperties {
    values: BTreeMap<String, String>,
}

impl BuildProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`BuildProperties::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Resolves `key`, or `default` when it is missing or blank.
    pub fn get_config_value(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => default.to_string(),
        }
    }

    /// Copies every entry of `other` over this map.
    pub fn merge(&mut self, other: BuildProperties) {
        self.values.extend(other.values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn root_namespace(&self) -> String {
        self.get_config_value(NAMESPACE_BUILD_PROPERTY, DEFAULT_NAMESPACE)
    }

    /// The default language, validated as a language identifier.
    pub fn default_language(&self) -> Result<String, Error> {
        let language = self.get_config_value(DEFAULT_LANGUAGE_BUILD_PROPERTY, DEFAULT_LANGUAGE);
        parse_language(&language)?;
        Ok(language)
    }

    pub fn project_dir(&self) -> String {
        self.get_config_value(PROJECT_DIRECTORY_BUILD_PROPERTY, "")
    }

    pub fn nullable(&self) -> NullableState {
        NullableState::from_setting(&self.get_config_value(NULLABLE_BUILD_PROPERTY, "enable"))
    }
}
