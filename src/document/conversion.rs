use super::graph::Document;
use crate::error::DocumentError;

/// A trait for deserializer output that can be turned into a nibgen `Document`.
///
/// The generator never reads raw markup itself. Whatever parses the interface file
/// implements this trait to hand over the finished object graph.
///
/// # Example
///
/// ```rust,no_run
/// use nibgen::document::{Document, IntoDocument, Node, Value, OBJECTS_KEY};
/// use nibgen::error::DocumentError;
///
/// struct MyParsedXib { root_class: String }
///
/// impl IntoDocument for MyParsedXib {
///     fn into_document(self) -> Result<Document, DocumentError> {
///         let mut document = Document::new();
///         let objects = document.add_node(Node::generic(None, &self.root_class));
///         document.properties.insert(OBJECTS_KEY.to_string(), Value::Node(objects));
///         Ok(document)
///     }
/// }
/// ```
pub trait IntoDocument {
    /// Consumes the parsed representation and builds the node graph.
    fn into_document(self) -> Result<Document, DocumentError>;
}

impl IntoDocument for Document {
    fn into_document(self) -> Result<Document, DocumentError> {
        Ok(self)
    }
}
