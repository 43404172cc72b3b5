//! Hierarchical device configuration handed to the driver at attach.
//!
//! One [`PinNode`] per intended pin, in declaration order. Nodes carry
//! an open set of string properties; the driver only consumes `label`.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// One configuration node describing a single pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinNode {
    name: String,
    properties: BTreeMap<String, String>,
}

impl PinNode {
    /// Create a node with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property attachment, used by the parser.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Node name as written in the configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an arbitrary string property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// The optional `label` property.
    pub fn label(&self) -> Option<&str> {
        self.property("label")
    }
}

/// Ordered collection of pin nodes; traversal order is declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigTree {
    pins: Vec<PinNode>,
}

impl ConfigTree {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self { pins: Vec::new() }
    }

    /// Append a node, preserving order.
    pub fn push(&mut self, node: PinNode) {
        self.pins.push(node);
    }

    /// Number of child nodes.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// True if the tree declares no pins.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Iterate nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PinNode> {
        self.pins.iter()
    }
}

impl FromIterator<PinNode> for ConfigTree {
    fn from_iter<T: IntoIterator<Item = PinNode>>(iter: T) -> Self {
        Self {
            pins: iter.into_iter().collect(),
        }
    }
}
