//! C# wrapper emission.
//!
//! This module provides the [`WrapperGenerator`], which turns a
//! [`ResourceTree`] into a C# source file exposing every resource as a static
//! string property. Nested keys become nested static classes that share the
//! root class' lazily created `ResourceLoader`.
//!
//! The output is deterministic: identical input always produces identical
//! text, byte for byte.

use crate::{
    error::Error,
    traits::LineWriter,
    tree::build_tree,
    types::{NullableState, ResourceContainer, ResourceEntry, ResourceTree, ToolIdentity},
    writer::OutputWriter,
};

const FQ_RESOURCE_LOADER: &str = "global::Microsoft.Windows.ApplicationModel.Resources.ResourceLoader";
const ACCESS_MODIFIER: &str = "internal";

/// Resource map opened by a parameterless `ResourceLoader`.
pub const DEFAULT_RESOURCE_MAP: &str = "Resources";

/// Appended to an accessor whose name is also taken by a nested class.
pub const COLLISION_SUFFIX: &str = "_Resource";

/// Appended to a nested class whose name is taken by the loader members or
/// by its enclosing class.
pub const CLASS_COLLISION_SUFFIX: &str = "_Resources";

/// Members emitted on the root class. `Loader` is resolved by simple name
/// from every nested class, so nothing else may be called that.
const RESERVED_MEMBER_NAMES: [&str; 2] = ["Loader", "resourceLoader"];

/// Generates C# accessor classes for ResW content.
#[derive(Debug, Clone)]
pub struct WrapperGenerator {
    namespace: String,
    nullable: NullableState,
    tool: ToolIdentity,
}

impl WrapperGenerator {
    /// Creates a generator emitting into `namespace`.
    pub fn new(namespace: impl Into<String>, nullable: NullableState) -> Self {
        WrapperGenerator {
            namespace: namespace.into(),
            nullable,
            tool: ToolIdentity::default(),
        }
    }

    /// Overrides the tool name and version written into the attribution.
    pub fn with_tool(mut self, tool: ToolIdentity) -> Self {
        self.tool = tool;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn nullable(&self) -> NullableState {
        self.nullable
    }

    pub fn tool(&self) -> &ToolIdentity {
        &self.tool
    }

    /// Generates the wrapper source for the supplied ResW contents.
    ///
    /// # Parameters
    /// - `contents`: The text of the ResW document.
    /// - `resource_map`: The resource map read at runtime; also the name of
    ///   the generated root class.
    ///
    /// # Returns
    ///
    /// The generated source, or an empty string when the document has no
    /// resources. Fails only if the document is not well-formed XML or the
    /// resource map name is empty.
    pub fn generate_wrapper_for_resw(
        &self,
        contents: &str,
        resource_map: &str,
    ) -> Result<String, Error> {
        match build_tree(contents, resource_map)? {
            Some(tree) => self.emit(&tree),
            None => Ok(String::new()),
        }
    }

    /// Emits the wrapper for an already built tree.
    pub fn emit(&self, tree: &ResourceTree) -> Result<String, Error> {
        let mut writer = OutputWriter::new();
        self.emit_into(tree, &mut writer)?;
        Ok(writer.into_output())
    }

    /// Emits the wrapper into any [`LineWriter`]. Writes nothing at all when
    /// the tree holds no resources.
    pub fn emit_into<W: LineWriter>(&self, tree: &ResourceTree, writer: &mut W) -> Result<(), Error> {
        if tree.is_empty() {
            return Ok(());
        }

        tracing::debug!(
            "emitting `{}.{}` ({} resources)",
            self.namespace,
            tree.root.name,
            tree.root.resource_count()
        );

        writer.write_line(&format!("namespace {} {{", self.namespace));
        writer.indent();

        self.write_attribution(writer);
        self.write_class(writer, &tree.root, &tree.root.name, Some(&tree.resource_map))?;

        writer.dedent()?;
        writer.write_line("}");
        Ok(())
    }

    fn write_attribution<W: LineWriter>(&self, writer: &mut W) {
        writer.write_line(&format!(
            "[global::System.CodeDom.Compiler.GeneratedCodeAttribute(\"{}\", \"{}\")]",
            escape_literal(&self.tool.name),
            escape_literal(&self.tool.version)
        ));
        writer.write_line("[global::System.Diagnostics.DebuggerNonUserCodeAttribute()]");
        writer.write_line("[global::System.Runtime.CompilerServices.CompilerGeneratedAttribute()]");
    }

    /// Writes one static class, then recurses into its children. Only the
    /// root gets a `resource_map`; nested classes use the enclosing `Loader`.
    fn write_class<W: LineWriter>(
        &self,
        writer: &mut W,
        container: &ResourceContainer,
        class_name: &str,
        resource_map: Option<&str>,
    ) -> Result<(), Error> {
        writer.write_line(&format!("{} static class {} {{", ACCESS_MODIFIER, class_name));
        writer.indent();

        let mut wrote_block = false;

        if let Some(resource_map) = resource_map {
            self.write_loader(writer, resource_map)?;
            wrote_block = true;
        }

        if !container.resources.is_empty() {
            if wrote_block {
                writer.blank_line();
            }
            for resource in &container.resources {
                write_accessor(writer, container, class_name, resource);
            }
            wrote_block = true;
        }

        for child in &container.children {
            if wrote_block {
                writer.blank_line();
            }
            self.write_class(writer, child, &nested_class_name(class_name, child), None)?;
            wrote_block = true;
        }

        writer.dedent()?;
        writer.write_line("}");
        Ok(())
    }

    fn write_loader<W: LineWriter>(&self, writer: &mut W, resource_map: &str) -> Result<(), Error> {
        writer.write_line(&format!(
            "private static {}{} resourceLoader;",
            FQ_RESOURCE_LOADER,
            self.nullable.marker()
        ));
        writer.blank_line();

        writer.write_line(&format!("private static {} Loader {{", FQ_RESOURCE_LOADER));
        writer.indent();
        writer.write_line("get {");
        writer.indent();
        writer.write_line("if (resourceLoader is null) {");
        writer.indent();
        writer.write_line(&format!(
            "resourceLoader = new {}({});",
            FQ_RESOURCE_LOADER,
            loader_argument(resource_map)
        ));
        writer.dedent()?;
        writer.write_line("}");
        writer.write_line("return resourceLoader;");
        writer.dedent()?;
        writer.write_line("}");
        writer.dedent()?;
        writer.write_line("}");
        Ok(())
    }
}

fn write_accessor<W: LineWriter>(
    writer: &mut W,
    container: &ResourceContainer,
    class_name: &str,
    resource: &ResourceEntry,
) {
    writer.write_line(&format!(
        "{} static string {} => Loader.GetString(\"{}\");",
        ACCESS_MODIFIER,
        accessor_name(container, class_name, resource),
        escape_literal(&resource.lookup)
    ));
}

/// The emitted property name for `resource` inside the class `class_name`.
///
/// Suffixed when a nested class in the same container, the enclosing class
/// or a loader member would otherwise share it.
pub fn accessor_name(container: &ResourceContainer, class_name: &str, resource: &ResourceEntry) -> String {
    if container.has_child_named(&resource.name)
        || same_name(&resource.name, class_name)
        || is_reserved(&resource.name)
    {
        format!("{}{}", resource.name, COLLISION_SUFFIX)
    } else {
        resource.name.clone()
    }
}

/// The emitted name of `child` nested in the class `parent_class`.
pub fn nested_class_name(parent_class: &str, child: &ResourceContainer) -> String {
    if same_name(&child.name, parent_class) || is_reserved(&child.name) {
        format!("{}{}", child.name, CLASS_COLLISION_SUFFIX)
    } else {
        child.name.clone()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn is_reserved(name: &str) -> bool {
    RESERVED_MEMBER_NAMES.iter().any(|reserved| same_name(reserved, name))
}

/// Constructor argument for the loader: none for the default map.
fn loader_argument(resource_map: &str) -> String {
    if resource_map.eq_ignore_ascii_case(DEFAULT_RESOURCE_MAP) {
        String::new()
    } else {
        format!("\"{}\"", escape_literal(resource_map))
    }
}

/// Escapes text for use inside a regular C# string literal.
fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}
