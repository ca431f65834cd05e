//! Language qualifiers in resource paths.
//!
//! ResW files are localized by folder (`Strings/en-us/Resources.resw`) or by
//! file name qualifier (`Strings/Resources.en-us.resw`), optionally spelled
//! `language-en-us`. Only documents for the default language are wrapped, and
//! every language variant of a file maps to the same logical name.

use std::{path::Path, str::FromStr};

use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// File extension of resource documents.
pub const RESW_EXTENSION: &str = "resw";

const LANGUAGE_PREFIX: &str = "language-";

/// Validates a configured language as a BCP-47 identifier.
///
/// # Example
/// ```rust
/// use reswrap::locale::parse_language;
/// assert!(parse_language("en-us").is_ok());
/// assert!(parse_language("not a language").is_err());
/// ```
pub fn parse_language(language: &str) -> Result<LanguageIdentifier, Error> {
    if language.trim().is_empty() {
        return Err(Error::InvalidLanguage(language.to_string()));
    }
    LanguageIdentifier::from_str(language.trim())
        .map_err(|_| Error::InvalidLanguage(language.to_string()))
}

/// True if `path` has the `.resw` extension, in any case.
pub fn is_resw<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RESW_EXTENSION))
}

/// True if `qualifier` is `language` or `language-<language>`, ignoring case.
pub fn is_language_qualifier(qualifier: &str, language: &str) -> bool {
    let qualifier = qualifier.to_ascii_lowercase();
    let language = language.trim().to_ascii_lowercase();
    qualifier == language
        || qualifier
            .strip_prefix(LANGUAGE_PREFIX)
            .is_some_and(|rest| rest == language)
}

/// Decides whether the document at `path` belongs to `language`.
///
/// The path is taken relative to `project_root` when it lies under it, so
/// that folders above the project never count. A document matches when any
/// folder, or any file name qualifier after the first dot, is a language
/// qualifier for `language`.
///
/// # Example
/// ```rust
/// use reswrap::locale::matches_language;
/// assert!(matches_language("Strings/en-us/Resources.resw", "en-us", ""));
/// assert!(matches_language("Strings/Resources.language-en-us.resw", "EN-US", ""));
/// assert!(!matches_language("Strings/fr-fr/Resources.resw", "en-us", ""));
/// assert!(!matches_language("Strings/Foo/Resources.resw", "en-us", ""));
/// ```
pub fn matches_language(path: &str, language: &str, project_root: &str) -> bool {
    let relative = relative_to_root(path, project_root);
    let mut segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
    let Some(file_name) = segments.pop() else {
        return false;
    };

    if segments
        .iter()
        .any(|segment| is_language_qualifier(segment, language))
    {
        return true;
    }

    file_stem(file_name)
        .split('.')
        .skip(1)
        .any(|qualifier| is_language_qualifier(qualifier, language))
}

/// Derives the logical resource map name for the document at `path`.
///
/// Language qualifiers for `language` are removed from the file name and
/// the remaining dot-separated parts are concatenated, so
/// `Resources.en-us.resw`, `Resources.resw` and `Res.our.ces.resw` all
/// resolve to `Resources`.
///
/// # Example
/// ```rust
/// use reswrap::locale::resolve_logical_name;
/// assert_eq!(resolve_logical_name("Strings/Resources.en-us.resw", "en-us"), "Resources");
/// assert_eq!(
///     resolve_logical_name("Strings/Other.Resources.language-en-us.resw", "en-us"),
///     "OtherResources"
/// );
/// ```
pub fn resolve_logical_name(path: &str, language: &str) -> String {
    let normalized = path.replace('\\', "/");
    let file_name = normalized.rsplit('/').next().unwrap_or_default();

    let mut parts = file_stem(file_name).split('.');
    let mut name = parts.next().unwrap_or_default().to_string();
    for part in parts.filter(|part| !is_language_qualifier(part, language)) {
        name.push_str(part);
    }
    name
}

fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case(RESW_EXTENSION) => stem,
        _ => file_name,
    }
}

fn relative_to_root(path: &str, project_root: &str) -> String {
    let path = path.replace('\\', "/");
    let root = project_root.replace('\\', "/");
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return path;
    }

    match path.get(..root.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(root) && path[root.len()..].starts_with('/') => {
            path[root.len()..].to_string()
        }
        _ => path,
    }
}
