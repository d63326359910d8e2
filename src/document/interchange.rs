//! JSON interchange format for document graphs.
//!
//! A document is a list of nodes plus a top-level property map:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "kind": "generic", "id": 5, "class": "IBUILabel", "properties": {} },
//!     { "kind": "reference", "target": { "$node": 0 } }
//!   ],
//!   "properties": {
//!     "IBDocument.Objects": {
//!       "connectionRecords": [
//!         { "$connection": { "connectionId": 1, "kind": "outlet", "label": "titleLabel",
//!                            "source": { "$node": 1 }, "destination": { "$node": 1 } } }
//!       ],
//!       "objectRecords": { "$orderedSet": [
//!         { "$object": { "objectId": 5, "object": { "$node": 1 } } }
//!       ] },
//!       "flattenedProperties": { "$dictionary": [ ["5.CustomClassName", "MyLabel"] ] }
//!     }
//!   }
//! }
//! ```
//!
//! Plain JSON objects become anonymous generic nodes of class `NSDictionary`, which is
//! how the `IBDocument.Objects` container above is expressed. Single-key objects whose
//! key starts with `$` are tagged values.

use super::conversion::IntoDocument;
use super::graph::Document;
use super::node::{Node, NodeIndex, ObjectId, PropertyBag, Value};
use super::record::{Connection, ConnectionRecord, ObjectRecord, PartialClassDescription};
use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

/// Class tag given to nodes created for plain JSON objects.
pub const ANONYMOUS_BAG_CLASS: &str = "NSDictionary";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub properties: Map<String, Json>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawNode {
    Generic {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<ObjectId>,
        class: String,
        #[serde(default)]
        properties: Map<String, Json>,
    },
    Proxy {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<ObjectId>,
        #[serde(default)]
        properties: Map<String, Json>,
    },
    Reference {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<ObjectId>,
        target: Json,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConnection {
    pub connection_id: i64,
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub source: Json,
    #[serde(default)]
    pub destination: Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawObjectRecord {
    pub object_id: ObjectId,
    pub object: Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPartialClass {
    #[serde(default)]
    pub class_name: Option<String>,
}

impl RawDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }
}

/// Parses interchange JSON straight into a `Document`.
pub fn document_from_json(json: &str) -> Result<Document, DocumentError> {
    RawDocument::from_json(json)?.into_document()
}

enum Pending {
    Properties(Map<String, Json>),
    Target(Json),
}

impl IntoDocument for RawDocument {
    fn into_document(self) -> Result<Document, DocumentError> {
        let mut document = Document::new();
        let declared = self.nodes.len();

        // Reserve arena slots first so `$node` indices line up with the raw list.
        let mut pending = Vec::with_capacity(declared);
        for raw in self.nodes {
            let (node, payload) = match raw {
                RawNode::Generic {
                    id,
                    class,
                    properties,
                } => (Node::generic(id, &class), Pending::Properties(properties)),
                RawNode::Proxy { id, properties } => {
                    (Node::proxy(id), Pending::Properties(properties))
                }
                RawNode::Reference { id, target } => {
                    (Node::reference(id, Value::Null), Pending::Target(target))
                }
            };
            pending.push((document.add_node(node), payload));
        }

        let mut converter = ValueConverter {
            document: &mut document,
            declared,
        };
        for (index, payload) in pending {
            match payload {
                Pending::Properties(map) => {
                    let bag = converter.bag(map)?;
                    if let Some(properties) =
                        converter.document.node_mut(index).and_then(Node::properties_mut)
                    {
                        *properties = bag;
                    }
                }
                Pending::Target(json) => {
                    let value = converter.value(json)?;
                    if let Some(Node::Reference { target, .. }) = converter.document.node_mut(index)
                    {
                        *target = value;
                    }
                }
            }
        }
        let properties = converter.bag(self.properties)?;
        document.properties = properties;
        Ok(document)
    }
}

struct ValueConverter<'a> {
    document: &'a mut Document,
    declared: usize,
}

impl ValueConverter<'_> {
    fn bag(&mut self, map: Map<String, Json>) -> Result<PropertyBag, DocumentError> {
        let mut bag = PropertyBag::with_capacity(map.len());
        for (key, json) in map {
            let value = self.value(json)?;
            bag.insert(key, value);
        }
        Ok(bag)
    }

    fn value(&mut self, json: Json) -> Result<Value, DocumentError> {
        Ok(match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Real).ok_or_else(|| {
                    DocumentError::InvalidValue(format!("Number {} is out of range", n))
                })?,
            },
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(self.values(items)?),
            Json::Object(map) => {
                let is_tagged = map.len() == 1 && map.keys().all(|k| k.starts_with('$'));
                if is_tagged {
                    let (tag, inner) = map.into_iter().next().ok_or_else(|| {
                        DocumentError::InvalidValue("Empty tagged value".to_string())
                    })?;
                    self.tagged(&tag, inner)?
                } else {
                    let properties = self.bag(map)?;
                    let index = self.document.add_node(Node::Generic {
                        id: None,
                        class: ANONYMOUS_BAG_CLASS.to_string(),
                        properties,
                    });
                    Value::Node(index)
                }
            }
        })
    }

    fn values(&mut self, items: Vec<Json>) -> Result<Vec<Value>, DocumentError> {
        items.into_iter().map(|item| self.value(item)).collect()
    }

    fn tagged(&mut self, tag: &str, inner: Json) -> Result<Value, DocumentError> {
        match tag {
            "$node" => {
                let index = inner.as_u64().ok_or_else(|| {
                    DocumentError::InvalidValue(format!("'$node' expects an index, got {}", inner))
                })? as usize;
                if index >= self.declared {
                    return Err(DocumentError::DanglingNode {
                        index,
                        len: self.declared,
                    });
                }
                Ok(Value::Node(NodeIndex(index)))
            }
            "$orderedSet" => Ok(Value::OrderedSet(self.values(expect_array(tag, inner)?)?)),
            "$dictionary" => {
                let mut pairs = Vec::new();
                for pair in expect_array(tag, inner)? {
                    let mut pair = expect_array(tag, pair)?;
                    if pair.len() != 2 {
                        return Err(DocumentError::InvalidValue(format!(
                            "'$dictionary' entries must be [key, value] pairs, got {} items",
                            pair.len()
                        )));
                    }
                    let value = pair.pop().unwrap_or(Json::Null);
                    let key = pair.pop().unwrap_or(Json::Null);
                    pairs.push((self.value(key)?, self.value(value)?));
                }
                Ok(Value::Dictionary(pairs))
            }
            "$connection" => {
                let raw: RawConnection = parse_inner(tag, inner)?;
                let source = self.value(raw.source)?;
                let destination = self.value(raw.destination)?;
                let connection = match raw.kind.as_str() {
                    "action" => Connection::Action {
                        label: raw.label,
                        source,
                        destination,
                    },
                    "outlet" => Connection::Outlet {
                        label: raw.label,
                        source,
                        destination,
                    },
                    _ => Connection::Unsupported { class: raw.kind },
                };
                Ok(Value::ConnectionRecord(Box::new(ConnectionRecord {
                    connection_id: raw.connection_id,
                    connection,
                })))
            }
            "$object" => {
                let raw: RawObjectRecord = parse_inner(tag, inner)?;
                Ok(Value::ObjectRecord(Box::new(ObjectRecord {
                    object_id: raw.object_id,
                    object: self.value(raw.object)?,
                })))
            }
            "$partialClass" => {
                let raw: RawPartialClass = parse_inner(tag, inner)?;
                Ok(Value::PartialClass(PartialClassDescription {
                    class_name: raw.class_name,
                }))
            }
            other => Err(DocumentError::InvalidValue(format!(
                "Unknown value tag '{}'",
                other
            ))),
        }
    }
}

fn expect_array(tag: &str, json: Json) -> Result<Vec<Json>, DocumentError> {
    match json {
        Json::Array(items) => Ok(items),
        other => Err(DocumentError::InvalidValue(format!(
            "'{}' expects an array, got {}",
            tag, other
        ))),
    }
}

fn parse_inner<T: serde::de::DeserializeOwned>(tag: &str, json: Json) -> Result<T, DocumentError> {
    serde_json::from_value(json)
        .map_err(|e| DocumentError::InvalidValue(format!("Malformed '{}': {}", tag, e)))
}
