//! Command line host for reswrap: discovery, configuration and batch output.

pub mod batch;
pub mod config;
pub mod discover;
pub mod generate;
pub mod logging;

pub use batch::{BuildOptions, BuildSummary, Outcome, run_build_command};
pub use config::{PropertyOverrides, load_build_properties, parse_config};
pub use discover::{Candidate, find_resource_files, select_documents};
pub use generate::{GenerateOptions, run_generate_command, tree_json};
