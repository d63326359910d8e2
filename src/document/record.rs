use super::node::{ObjectId, Value};
use serde::{Deserialize, Serialize};

/// One wiring instruction from the document's `connectionRecords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub connection_id: i64,
    pub connection: Connection,
}

/// The payload of a connection record. Endpoints are usually links to reference nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Connection {
    /// `destination` owns the generated method, `source` is the sender.
    Action {
        label: String,
        source: Value,
        destination: Value,
    },
    /// `source` owns the generated property, `destination` is the assigned widget.
    Outlet {
        label: String,
        source: Value,
        destination: Value,
    },
    /// A connection kind from a document variant with no code-behind counterpart,
    /// e.g. bindings from desktop documents.
    Unsupported { class: String },
}

impl Connection {
    pub fn action(label: &str, source: impl Into<Value>, destination: impl Into<Value>) -> Self {
        Connection::Action {
            label: label.to_string(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn outlet(label: &str, source: impl Into<Value>, destination: impl Into<Value>) -> Self {
        Connection::Outlet {
            label: label.to_string(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Connection::Action { label, .. } | Connection::Outlet { label, .. } => Some(label),
            Connection::Unsupported { .. } => None,
        }
    }

    /// The endpoint whose object receives the generated member.
    pub fn owner_endpoint(&self) -> Option<&Value> {
        match self {
            Connection::Action { destination, .. } => Some(destination),
            Connection::Outlet { source, .. } => Some(source),
            Connection::Unsupported { .. } => None,
        }
    }
}

/// An entry of `objectRecords`, pairing the declared identity with the wrapped object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub object_id: ObjectId,
    pub object: Value,
}

/// A class the document's own catalogue lists as needing a partial declaration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialClassDescription {
    pub class_name: Option<String>,
}
