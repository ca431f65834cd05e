use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;
use reswrap::locale::{is_resw, matches_language, resolve_logical_name};

/// Include pattern used when none is given.
pub const DEFAULT_INCLUDE: &str = "**/*.resw";

/// A resource document selected for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Resource map name, also the generated root class and file name.
    pub logical_name: String,
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet, String> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = GlobBuilder::new(pat)
            .literal_separator(true)
            .case_insensitive(true)
            .build()
            .map_err(|e| format!("Invalid glob pattern '{}': {}", pat, e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| format!("Failed to build glob set: {}", e))
}

/// Walks `roots` (gitignore-aware) and returns every file matching one of
/// `includes`, sorted and without duplicates. Patterns are matched against
/// the path relative to the root being walked.
pub fn find_resource_files(roots: &[PathBuf], includes: &[String]) -> Result<Vec<PathBuf>, String> {
    let patterns: Vec<String> = if includes.is_empty() {
        vec![DEFAULT_INCLUDE.to_string()]
    } else {
        includes.to_vec()
    };
    let set = build_glob_set(&patterns)?;

    for root in roots {
        if !root.is_dir() {
            return Err(format!("Not a directory: {}", root.display()));
        }
    }

    let mut files: Vec<PathBuf> = roots
        .par_iter()
        .map(|root| walk_root(root, &set))
        .flatten()
        .collect();

    files.sort();
    files.dedup();
    tracing::debug!("found {} files matching {:?}", files.len(), patterns);
    Ok(files)
}

fn walk_root(root: &Path, set: &GlobSet) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let walker = WalkBuilder::new(root)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .hidden(false)
        .ignore(true)
        .parents(true)
        .build();

    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !dent.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let relative = dent.path().strip_prefix(root).unwrap_or(dent.path());
        let relative = relative.to_string_lossy().replace('\\', "/");
        if set.is_match(&relative) {
            out.push(dent.path().to_path_buf());
        }
    }
    out
}

/// Keeps the `.resw` files that belong to `language` and assigns logical
/// names. The first file for a logical name wins; later ones are skipped.
pub fn select_documents(files: &[PathBuf], language: &str, project_dir: &str) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut selected = Vec::new();

    for path in files {
        if !is_resw(path) {
            tracing::debug!("not a resource document: {}", path.display());
            continue;
        }
        let path_str = path.to_string_lossy();
        if !matches_language(&path_str, language, project_dir) {
            tracing::debug!("skipping {}: not a `{}` document", path.display(), language);
            continue;
        }

        let logical_name = resolve_logical_name(&path_str, language);
        if !seen.insert(logical_name.to_lowercase()) {
            tracing::warn!(
                "skipping {}: logical name `{}` is already taken",
                path.display(),
                logical_name
            );
            continue;
        }

        selected.push(Candidate {
            path: path.clone(),
            logical_name,
        });
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<root/>").unwrap();
    }

    #[test]
    fn test_find_resource_files_default_pattern() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Strings/en-us/Resources.resw");
        touch(dir.path(), "Strings/fr-fr/Resources.resw");
        touch(dir.path(), "Strings/en-us/Resources.resx");
        touch(dir.path(), "Top.resw");

        let files = find_resource_files(&[dir.path().to_path_buf()], &[]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "Strings/en-us/Resources.resw",
                "Strings/fr-fr/Resources.resw",
                "Top.resw"
            ]
        );
    }

    #[test]
    fn test_find_resource_files_custom_include() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Strings/en-us/Resources.resw");
        touch(dir.path(), "Other/en-us/Resources.resw");

        let files =
            find_resource_files(&[dir.path().to_path_buf()], &["Strings/**/*.resw".to_string()])
                .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Strings/en-us/Resources.resw"));
    }

    #[test]
    fn test_invalid_glob_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = find_resource_files(&[dir.path().to_path_buf()], &["[".to_string()]);
        assert!(result.unwrap_err().contains("Invalid glob pattern"));
    }

    #[test]
    fn test_missing_root_is_reported() {
        let dir = TempDir::new().unwrap();
        let result = find_resource_files(&[dir.path().join("missing")], &[]);
        assert!(result.unwrap_err().contains("Not a directory"));
    }

    #[test]
    fn test_select_documents_filters_language() {
        let files = vec![
            PathBuf::from("proj/Strings/en-us/Resources.resw"),
            PathBuf::from("proj/Strings/fr-fr/Resources.resw"),
            PathBuf::from("proj/Strings/Errors.en-us.resw"),
            PathBuf::from("proj/Strings/Errors.fr-fr.resw"),
            PathBuf::from("proj/Strings/en-us/Notes.txt"),
        ];
        let selected = select_documents(&files, "en-us", "proj");
        let names: Vec<&str> = selected.iter().map(|c| c.logical_name.as_str()).collect();
        assert_eq!(names, vec!["Resources", "Errors"]);
    }

    #[test]
    fn test_select_documents_first_logical_name_wins() {
        let files = vec![
            PathBuf::from("Strings/Resources.en-us.resw"),
            PathBuf::from("Strings/en-us/Resources.resw"),
        ];
        let selected = select_documents(&files, "en-us", "");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, PathBuf::from("Strings/Resources.en-us.resw"));
    }
}
