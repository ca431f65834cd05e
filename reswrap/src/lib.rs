#![forbid(unsafe_code)]
//! Strongly-typed C# accessors for Windows App SDK `.resw` resources.
//!
//! Reads the `<data name="...">` entries of a ResW document, folds dotted
//! keys into nested classes, and emits a C# source file exposing each
//! resource as a static string property backed by a shared `ResourceLoader`.
//!
//! # Quick Start
//!
//! ```rust
//! use reswrap::{NullableState, generate};
//!
//! let resw = r#"<root>
//!     <data name="Greeting"><value>Hello</value></data>
//!     <data name="Errors.NotFound"><value>Missing</value></data>
//! </root>"#;
//!
//! let source = generate(resw, "Resources", "My.App", NullableState::Enabled, "reswrap", "1.0.0")?;
//! assert!(source.contains("internal static string Greeting => Loader.GetString(\"Greeting\");"));
//! assert!(source.contains("internal static class Errors {"));
//! # Ok::<(), reswrap::Error>(())
//! ```
//!
//! # Pieces
//!
//! - [`tree`]: dotted keys to a [`ResourceTree`]
//! - [`generator`]: a [`ResourceTree`] to C# text
//! - [`locale`]: default-language filtering and logical names for files
//! - [`config`]: host build properties and their defaults

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod locale;
pub mod traits;
pub mod tree;
pub mod types;
pub mod writer;

pub use crate::{
    config::BuildProperties,
    document::{parse_resource_keys, read_document},
    error::Error,
    generator::{COLLISION_SUFFIX, DEFAULT_RESOURCE_MAP, WrapperGenerator},
    locale::{matches_language, resolve_logical_name},
    traits::LineWriter,
    tree::build_tree,
    types::{NullableState, ResourceContainer, ResourceEntry, ResourceTree, ToolIdentity},
    writer::OutputWriter,
};

/// Generates the wrapper source for one ResW document.
///
/// `root_name` is both the resource map read at runtime and the name of the
/// generated root class. Returns an empty string when the document holds no
/// resources.
pub fn generate(
    document: &str,
    root_name: &str,
    namespace: &str,
    nullable: NullableState,
    tool_name: &str,
    tool_version: &str,
) -> Result<String, Error> {
    WrapperGenerator::new(namespace, nullable)
        .with_tool(ToolIdentity::new(tool_name, tool_version))
        .generate_wrapper_for_resw(document, root_name)
}
