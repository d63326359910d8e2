use super::node::{Node, NodeIndex, PropertyBag, Value};
use serde::{Deserialize, Serialize};

/// Top-level key of the object container node.
pub const OBJECTS_KEY: &str = "IBDocument.Objects";
/// Top-level key of the class catalogue node.
pub const CLASSES_KEY: &str = "IBDocument.Classes";

/// An interface document that has already been deserialized into a node graph.
///
/// Nodes are stored in an arena and linked through `Value::Node`. The document is
/// never mutated by generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub properties: PropertyBag,
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the arena and returns its handle.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        NodeIndex(self.nodes.len() - 1)
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0)
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(index.0)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Follows reference nodes until a value that is not a reference is reached.
    ///
    /// Anything that is not a link to a reference node is returned unchanged, so this
    /// never fails. Reference chains are acyclic in well-formed documents; there is no
    /// cycle detection. A dangling link resolves to itself.
    pub fn resolve<'a>(&'a self, value: &'a Value) -> &'a Value {
        let mut current = value;
        while let Value::Node(index) = current {
            match self.node(*index) {
                Some(Node::Reference { target, .. }) => current = target,
                _ => break,
            }
        }
        current
    }

    /// Resolves `value` and returns the concrete node it lands on, if any.
    ///
    /// The returned node borrows from the arena only, so `value` may be a temporary.
    pub fn resolve_node(&self, value: &Value) -> Option<&Node> {
        let mut index = value.as_node_index()?;
        loop {
            match self.node(index)? {
                Node::Reference { target, .. } => index = target.as_node_index()?,
                node => return Some(node),
            }
        }
    }

    /// Looks up a top-level property and resolves it to a node with a property bag.
    pub fn property_node(&self, key: &str) -> Option<&Node> {
        self.properties
            .get(key)
            .and_then(|value| self.resolve_node(value))
            .filter(|node| node.properties().is_some())
    }

    /// The `IBDocument.Objects` container, if present.
    pub fn objects(&self) -> Option<&Node> {
        self.property_node(OBJECTS_KEY)
    }

    /// The `IBDocument.Classes` catalogue, if present.
    pub fn classes(&self) -> Option<&Node> {
        self.property_node(CLASSES_KEY)
    }
}
