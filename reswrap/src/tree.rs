//! Folding dotted resource keys into a [`ResourceTree`].

use crate::{
    document::parse_resource_keys,
    error::Error,
    types::{ResourceContainer, ResourceTree},
};

/// Separates hierarchy levels in a resource key (`Foo.Bar`).
pub const HIERARCHY_DELIMITER: char = '.';

/// Joins the segments of a nested key into its runtime lookup name (`Foo/Bar`).
pub const LOOKUP_DELIMITER: &str = "/";

/// Parses `contents` and builds the resource tree for `resource_map`.
///
/// Returns `Ok(None)` when there is nothing to generate: the document has no
/// root element or no usable `<data>` entries.
///
/// # Example
///
/// ```rust
/// use reswrap::tree::build_tree;
///
/// let xml = r#"<root><data name="Foo.Bar"/></root>"#;
/// let tree = build_tree(xml, "Resources")?.unwrap();
/// let foo = tree.root.find_child("Foo").unwrap();
/// assert_eq!(foo.find_resource("Bar").unwrap().lookup, "Foo/Bar");
/// # Ok::<(), reswrap::Error>(())
/// ```
pub fn build_tree(contents: &str, resource_map: &str) -> Result<Option<ResourceTree>, Error> {
    if resource_map.is_empty() {
        return Err(Error::InvalidName(
            "resource map name must not be empty".to_string(),
        ));
    }

    let keys = match parse_resource_keys(contents)? {
        Some(keys) if !keys.is_empty() => keys,
        _ => {
            tracing::debug!("no resources found for `{}`", resource_map);
            return Ok(None);
        }
    };

    let mut tree = ResourceTree::new(resource_map);
    for key in &keys {
        tree.insert_key(key);
    }

    tracing::debug!(
        "built tree for `{}`: {} resources from {} entries",
        resource_map,
        tree.root.resource_count(),
        keys.len()
    );
    Ok(Some(tree))
}

impl ResourceTree {
    /// Builds a tree directly from keys, skipping document parsing.
    pub fn from_keys<I, S>(resource_map: &str, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = ResourceTree::new(resource_map);
        for key in keys {
            tree.insert_key(key.as_ref());
        }
        tree
    }

    /// Adds one resource key to the tree.
    ///
    /// `Foo` becomes a direct resource of the root. `Foo.Bar.Baz` walks (and
    /// creates) the `Foo` and `Bar` containers and registers `Baz` there,
    /// looked up at runtime as `Foo/Bar/Baz`.
    pub fn insert_key(&mut self, key: &str) {
        let segments: Vec<&str> = key.split(HIERARCHY_DELIMITER).collect();
        let Some((leaf, path)) = segments.split_last() else {
            return;
        };

        if path.is_empty() {
            self.root.add_resource(*leaf, *leaf);
            return;
        }

        let mut node: &mut ResourceContainer = &mut self.root;
        for segment in path {
            node = node.child_mut(segment);
        }
        tracing::trace!("nested resource `{}` under `{}`", leaf, path.join("."));
        node.add_resource(*leaf, segments.join(LOOKUP_DELIMITER));
    }
}
