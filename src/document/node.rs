use super::record::{ConnectionRecord, ObjectRecord, PartialClassDescription};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identity of an object inside a single document. Unique per document, but optional.
pub type ObjectId = i64;

/// Ordered, keyed property bag carried by generic and proxy nodes.
pub type PropertyBag = IndexMap<String, Value>;

/// Position of a node in the owning `Document`'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub usize);

/// A vertex of the document graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A variant object: a designer class tag plus an arbitrary property bag.
    Generic {
        id: Option<ObjectId>,
        class: String,
        properties: PropertyBag,
    },
    /// The placeholder standing in for the file's owner or first responder.
    Proxy {
        id: Option<ObjectId>,
        properties: PropertyBag,
    },
    /// An indirection to another value, usually a `Value::Node` link.
    Reference { id: Option<ObjectId>, target: Value },
}

impl Node {
    pub fn generic(id: Option<ObjectId>, class: &str) -> Self {
        Node::Generic {
            id,
            class: class.to_string(),
            properties: PropertyBag::new(),
        }
    }

    pub fn proxy(id: Option<ObjectId>) -> Self {
        Node::Proxy {
            id,
            properties: PropertyBag::new(),
        }
    }

    pub fn reference(id: Option<ObjectId>, target: Value) -> Self {
        Node::Reference { id, target }
    }

    /// Adds a property to a generic or proxy node. References carry no properties,
    /// so the call is a no-op on them.
    pub fn with_property(mut self, key: &str, value: Value) -> Self {
        if let Some(properties) = self.properties_mut() {
            properties.insert(key.to_string(), value);
        }
        self
    }

    pub fn id(&self) -> Option<ObjectId> {
        match self {
            Node::Generic { id, .. } | Node::Proxy { id, .. } | Node::Reference { id, .. } => *id,
        }
    }

    /// The designer class tag. Only generic nodes have one.
    pub fn class(&self) -> Option<&str> {
        match self {
            Node::Generic { class, .. } => Some(class),
            _ => None,
        }
    }

    pub fn properties(&self) -> Option<&PropertyBag> {
        match self {
            Node::Generic { properties, .. } | Node::Proxy { properties, .. } => Some(properties),
            Node::Reference { .. } => None,
        }
    }

    pub fn properties_mut(&mut self) -> Option<&mut PropertyBag> {
        match self {
            Node::Generic { properties, .. } | Node::Proxy { properties, .. } => Some(properties),
            Node::Reference { .. } => None,
        }
    }

    /// Keyed lookup into the property bag.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties().and_then(|p| p.get(key))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Node::Reference { .. })
    }
}

/// An untyped property value as found in the document's property bags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(Vec<Value>),
    OrderedSet(Vec<Value>),
    /// Key/value pairs in document order.
    Dictionary(Vec<(Value, Value)>),
    /// Non-owning link to a node in the document arena.
    Node(NodeIndex),
    ConnectionRecord(Box<ConnectionRecord>),
    ObjectRecord(Box<ObjectRecord>),
    PartialClass(PartialClassDescription),
}

impl Value {
    pub fn string(s: &str) -> Self {
        Value::String(s.to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_node_index(&self) -> Option<NodeIndex> {
        match self {
            Value::Node(index) => Some(*index),
            _ => None,
        }
    }

    /// The members of an array or ordered set.
    pub fn as_collection(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) | Value::OrderedSet(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Dictionary(pairs) => Some(pairs),
            _ => None,
        }
    }
}

impl From<NodeIndex> for Value {
    fn from(index: NodeIndex) -> Self {
        Value::Node(index)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
