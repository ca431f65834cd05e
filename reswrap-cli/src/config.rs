use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use reswrap::BuildProperties;
use reswrap::config::{
    DEFAULT_LANGUAGE_BUILD_PROPERTY, NAMESPACE_BUILD_PROPERTY, NULLABLE_BUILD_PROPERTY,
    PROJECT_DIRECTORY_BUILD_PROPERTY,
};
use serde::Deserialize;

/// Config file looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "reswrap.toml";

const BUILD_PROPERTY_PREFIX: &str = "build_properties.";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    build_properties: BTreeMap<String, String>,
}

/// Parses a `reswrap.toml` document into build properties.
///
/// ```toml
/// [build_properties]
/// RootNamespace = "My.App"
/// DefaultLanguage = "en-us"
/// Nullable = "disable"
/// ```
pub fn parse_config(contents: &str) -> Result<BuildProperties, String> {
    let file: ConfigFile =
        toml::from_str(contents).map_err(|e| format!("Invalid config file: {}", e))?;

    let mut props = BuildProperties::new();
    for (key, value) in file.build_properties {
        props.set(format!("{}{}", BUILD_PROPERTY_PREFIX, key), value);
    }
    Ok(props)
}

/// Loads build properties from `explicit`, or from `reswrap.toml` under
/// `project_root` when present. A missing default file is not an error.
pub fn load_build_properties(
    explicit: Option<&Path>,
    project_root: &Path,
) -> Result<BuildProperties, String> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(format!("Config file not found: {}", path.display()));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let path = project_root.join(DEFAULT_CONFIG_FILE);
            if !path.is_file() {
                tracing::debug!("no {} in {}", DEFAULT_CONFIG_FILE, project_root.display());
                return Ok(BuildProperties::new());
            }
            path
        }
    };

    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let props = parse_config(&contents).map_err(|e| format!("{}: {}", path.display(), e))?;
    tracing::info!(
        "loaded {} build properties from {}",
        props.iter().count(),
        path.display()
    );
    Ok(props)
}

/// Build properties given on the command line. They win over file values.
#[derive(Debug, Clone, Default)]
pub struct PropertyOverrides {
    pub namespace: Option<String>,
    pub language: Option<String>,
    pub project_dir: Option<String>,
    pub nullable: Option<String>,
}

impl PropertyOverrides {
    pub fn apply(&self, props: &mut BuildProperties) {
        let pairs = [
            (NAMESPACE_BUILD_PROPERTY, &self.namespace),
            (DEFAULT_LANGUAGE_BUILD_PROPERTY, &self.language),
            (PROJECT_DIRECTORY_BUILD_PROPERTY, &self.project_dir),
            (NULLABLE_BUILD_PROPERTY, &self.nullable),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                props.set(key, value.clone());
            }
        }
    }

    /// Overrides applied on top of nothing but the defaults.
    pub fn into_properties(self) -> BuildProperties {
        let mut props = BuildProperties::new();
        self.apply(&mut props);
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reswrap::NullableState;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_flattens_table() {
        let props = parse_config(
            r#"
            [build_properties]
            RootNamespace = "My.App"
            Nullable = "disable"
            "#,
        )
        .unwrap();
        assert_eq!(props.get(NAMESPACE_BUILD_PROPERTY), Some("My.App"));
        assert_eq!(props.root_namespace(), "My.App");
        assert_eq!(props.nullable(), NullableState::Disabled);
        assert_eq!(props.default_language().unwrap(), "en-us");
    }

    #[test]
    fn test_parse_empty_config() {
        let props = parse_config("").unwrap();
        assert_eq!(props.iter().count(), 0);
    }

    #[test]
    fn test_parse_config_rejects_unknown_tables() {
        let result = parse_config("[other]\nkey = \"value\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_rejects_non_string_values() {
        let result = parse_config("[build_properties]\nNullable = false\n");
        assert!(result.unwrap_err().contains("Invalid config file"));
    }

    #[test]
    fn test_load_missing_default_is_empty() {
        let dir = TempDir::new().unwrap();
        let props = load_build_properties(None, dir.path()).unwrap();
        assert_eq!(props, BuildProperties::new());
    }

    #[test]
    fn test_load_default_file_from_project_root() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[build_properties]\nRootNamespace = \"From.File\"\n",
        )
        .unwrap();
        let props = load_build_properties(None, dir.path()).unwrap();
        assert_eq!(props.root_namespace(), "From.File");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = load_build_properties(Some(&missing), dir.path());
        assert!(result.unwrap_err().contains("Config file not found"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut props =
            parse_config("[build_properties]\nRootNamespace = \"File\"\nDefaultLanguage = \"fr-fr\"\n")
                .unwrap();
        let overrides = PropertyOverrides {
            namespace: Some("Flag".to_string()),
            ..Default::default()
        };
        overrides.apply(&mut props);
        assert_eq!(props.root_namespace(), "Flag");
        assert_eq!(props.default_language().unwrap(), "fr-fr");
    }
}
