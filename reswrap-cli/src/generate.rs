use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use reswrap::{BuildProperties, WrapperGenerator, build_tree, read_document, resolve_logical_name};

use crate::config::PropertyOverrides;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    /// Resource map and root class name; derived from the file name if unset.
    pub name: Option<String>,
    pub output: Option<PathBuf>,
    pub overrides: PropertyOverrides,
}

fn resource_map_name(input: &Path, name: Option<&str>, props: &BuildProperties) -> Result<String, String> {
    if let Some(name) = name {
        return Ok(name.to_string());
    }
    let language = props.default_language().map_err(|e| e.to_string())?;
    Ok(resolve_logical_name(&input.to_string_lossy(), &language))
}

/// Generates the wrapper for a single document, to `output` or stdout.
pub fn run_generate_command(options: &GenerateOptions) -> Result<(), String> {
    let props = options.overrides.clone().into_properties();
    let name = resource_map_name(&options.input, options.name.as_deref(), &props)?;
    let contents = read_document(&options.input)
        .map_err(|e| format!("Failed to read {}: {}", options.input.display(), e))?;

    let text = WrapperGenerator::new(props.root_namespace(), props.nullable())
        .generate_wrapper_for_resw(&contents, &name)
        .map_err(|e| format!("{}: {}", options.input.display(), e))?;

    if text.is_empty() {
        tracing::warn!("{} has no resources, nothing generated", options.input.display());
        return Ok(());
    }

    match &options.output {
        Some(path) => {
            fs::write(path, &text).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(text.as_bytes())
                .map_err(|e| format!("Failed to write output: {}", e))?;
        }
    }
    Ok(())
}

/// Builds the resource tree for one document and renders it as JSON.
/// A document without resources renders as an empty root.
pub fn tree_json(input: &Path, name: Option<&str>, language: Option<&str>) -> Result<String, String> {
    let overrides = PropertyOverrides {
        language: language.map(str::to_string),
        ..Default::default()
    };
    let props = overrides.into_properties();
    let name = resource_map_name(input, name, &props)?;
    let contents =
        read_document(input).map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let tree = build_tree(&contents, &name)
        .map_err(|e| format!("{}: {}", input.display(), e))?
        .unwrap_or_else(|| reswrap::ResourceTree::new(name));
    serde_json::to_string_pretty(&tree).map_err(|e| format!("Failed to serialize tree: {}", e))
}
