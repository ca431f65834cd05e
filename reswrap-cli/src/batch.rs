use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use reswrap::{NullableState, WrapperGenerator, read_document};

use crate::config::{PropertyOverrides, load_build_properties};
use crate::discover::{Candidate, find_resource_files, select_documents};

/// Suffix of every generated file.
pub const GENERATED_EXTENSION: &str = "g.cs";

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub project: PathBuf,
    pub out_dir: PathBuf,
    pub includes: Vec<String>,
    pub config: Option<PathBuf>,
    pub overrides: PropertyOverrides,
}

/// What happened to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    /// The document holds no resources; nothing was written.
    Empty,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub candidate: Candidate,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub reports: Vec<DocumentReport>,
}

impl BuildSummary {
    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Written(_)))
    }

    pub fn empty(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Empty))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Discovers the default-language documents of a project and writes one
/// wrapper per logical name into `out_dir`.
///
/// Per-document failures are collected in the summary; only configuration
/// and discovery problems fail the whole build.
pub fn run_build_command(options: &BuildOptions) -> Result<BuildSummary, String> {
    let mut props = load_build_properties(options.config.as_deref(), &options.project)?;
    options.overrides.apply(&mut props);

    let language = props.default_language().map_err(|e| e.to_string())?;
    let namespace = props.root_namespace();
    let nullable = props.nullable();
    let project_dir = match props.project_dir() {
        dir if dir.is_empty() => options.project.to_string_lossy().to_string(),
        dir => dir,
    };
    tracing::info!(
        "building `{}` (language {}, nullable {:?})",
        namespace,
        language,
        nullable
    );

    let files = find_resource_files(std::slice::from_ref(&options.project), &options.includes)?;
    let candidates = select_documents(&files, &language, &project_dir);
    if candidates.is_empty() {
        tracing::warn!("no `{}` resource documents found", language);
        return Ok(BuildSummary::default());
    }

    fs::create_dir_all(&options.out_dir)
        .map_err(|e| format!("Failed to create {}: {}", options.out_dir.display(), e))?;

    let reports = generate_all(&candidates, &namespace, nullable, &options.out_dir);
    Ok(BuildSummary { reports })
}

/// Generates every candidate in parallel. Order of the reports follows
/// the order of `candidates`.
pub fn generate_all(
    candidates: &[Candidate],
    namespace: &str,
    nullable: NullableState,
    out_dir: &Path,
) -> Vec<DocumentReport> {
    candidates
        .par_iter()
        .map(|candidate| {
            let outcome = match generate_one(candidate, namespace, nullable, out_dir) {
                Ok(Some(path)) => {
                    tracing::info!("{} -> {}", candidate.path.display(), path.display());
                    Outcome::Written(path)
                }
                Ok(None) => {
                    tracing::info!("{}: no resources, nothing written", candidate.path.display());
                    Outcome::Empty
                }
                Err(e) => {
                    tracing::error!("{}: {}", candidate.path.display(), e);
                    Outcome::Failed(e)
                }
            };
            DocumentReport {
                candidate: candidate.clone(),
                outcome,
            }
        })
        .collect()
}

fn generate_one(
    candidate: &Candidate,
    namespace: &str,
    nullable: NullableState,
    out_dir: &Path,
) -> Result<Option<PathBuf>, String> {
    let contents = read_document(&candidate.path).map_err(|e| e.to_string())?;
    let text = WrapperGenerator::new(namespace, nullable)
        .generate_wrapper_for_resw(&contents, &candidate.logical_name)
        .map_err(|e| e.to_string())?;
    emit(out_dir, &candidate.logical_name, &text)
}

/// Writes `<out_dir>/<logical_name>.g.cs`. Empty text writes nothing.
pub fn emit(out_dir: &Path, logical_name: &str, text: &str) -> Result<Option<PathBuf>, String> {
    if text.is_empty() {
        return Ok(None);
    }
    let path = out_dir.join(format!("{}.{}", logical_name, GENERATED_EXTENSION));
    fs::write(&path, text).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(Some(path))
}
