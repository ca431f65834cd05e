//! Core types for reswrap.
//! The tree builder produces these; the emitter reads them.

use serde::Serialize;

/// One direct resource of a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// Leaf identifier, used as the accessor name.
    pub name: String,
    /// The key used at runtime to fetch the value (`Foo/Bar` for `Foo.Bar`).
    pub lookup: String,
}

/// A named node in the resource hierarchy.
///
/// `resources` and `children` are independent ordered mappings; the same
/// name may appear in both. Order is first-seen document order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResourceContainer {
    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceEntry>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResourceContainer>,
}

impl ResourceContainer {
    pub fn new(name: impl Into<String>) -> Self {
        ResourceContainer {
            name: name.into(),
            resources: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Registers a direct resource. A repeated name keeps its original
    /// position and takes the newer lookup name.
    pub fn add_resource(&mut self, name: impl Into<String>, lookup: impl Into<String>) {
        let name = name.into();
        let lookup = lookup.into();
        match self.resources.iter_mut().find(|r| r.name == name) {
            Some(existing) => existing.lookup = lookup,
            None => self.resources.push(ResourceEntry { name, lookup }),
        }
    }

    pub fn find_resource(&self, name: &str) -> Option<&ResourceEntry> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn find_child(&self, name: &str) -> Option<&ResourceContainer> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the child named `name`, creating it at the end if missing.
    pub fn child_mut(&mut self, name: &str) -> &mut ResourceContainer {
        let index = match self.children.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.children.push(ResourceContainer::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// True if a child container shares `name`, ignoring case.
    pub fn has_child_named(&self, name: &str) -> bool {
        self.children
            .iter()
            .any(|c| c.name.to_lowercase() == name.to_lowercase())
    }

    /// True if this container or any descendant holds a direct resource.
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty() || self.children.iter().any(ResourceContainer::has_resources)
    }

    /// Number of direct resources here and in all descendants.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
            + self
                .children
                .iter()
                .map(ResourceContainer::resource_count)
                .sum::<usize>()
    }
}

/// A fully built hierarchy plus the resource map it was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceTree {
    /// Resource map opened at runtime; also the root type name.
    pub resource_map: String,
    pub root: ResourceContainer,
}

impl ResourceTree {
    pub fn new(resource_map: impl Into<String>) -> Self {
        let resource_map = resource_map.into();
        ResourceTree {
            root: ResourceContainer::new(resource_map.clone()),
            resource_map,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.root.has_resources()
    }
}

/// Whether emitted reference-typed fields carry the `?` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NullableState {
    #[default]
    Enabled,
    Disabled,
}

impl NullableState {
    /// Maps a build setting (`enable`, `disable`, `annotations`, `warnings`)
    /// to a state. Only `disable` turns annotations off.
    pub fn from_setting(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("disable") {
            NullableState::Disabled
        } else {
            NullableState::Enabled
        }
    }

    /// Marker appended to nullable reference types.
    pub fn marker(self) -> &'static str {
        match self {
            NullableState::Enabled => "?",
            NullableState::Disabled => "",
        }
    }
}

/// Name and version recorded in the generated-code attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolIdentity {
    pub name: String,
    pub version: String,
}

impl ToolIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        ToolIdentity {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for ToolIdentity {
    fn default() -> Self {
        ToolIdentity::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
