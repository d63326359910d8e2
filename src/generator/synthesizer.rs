use super::index::ClassIndex;
use super::naming::TypeMapper;
use crate::codegen::TypeDeclaration;
use crate::document::{Document, Node, ObjectId, Value};
use indexmap::IndexMap;
use tracing::{debug, trace};

const OBJECT_RECORDS_KEY: &str = "objectRecords";
/// Set on placeholders whose class is defined by a different nib.
const NIB_NAME_KEY: &str = "IBUINibName";
/// Class tag of a plain "custom object" placed in the document.
const CUSTOM_OBJECT_CLASS: &str = "IBUICustomObject";

/// Builds one partial class per eligible object record, keyed by resolved identity,
/// in document order.
pub(super) fn synthesize_types(
    document: &Document,
    objects: &Node,
    index: &ClassIndex,
    mapper: &TypeMapper,
) -> IndexMap<ObjectId, TypeDeclaration> {
    let mut types = IndexMap::new();
    let Some(records) = objects
        .property(OBJECT_RECORDS_KEY)
        .and_then(Value::as_collection)
    else {
        debug!("Document has no object records");
        return types;
    };

    let register = mapper.register_attribute();
    for record in records {
        let Value::ObjectRecord(record) = record else {
            continue;
        };
        let Some(object) = document.resolve_node(&record.object) else {
            trace!(object_id = record.object_id, "Object record does not resolve to a node");
            continue;
        };
        let Some(id) = object.id() else {
            trace!(object_id = record.object_id, "Object record has no identity");
            continue;
        };
        let Some(name) = index.approved_class(record.object_id) else {
            continue;
        };

        let base_type = match object {
            Node::Proxy { .. } => mapper.view_controller_type(),
            Node::Generic { class, .. } => {
                // The class belongs to the other nib's code-behind.
                if object
                    .property(NIB_NAME_KEY)
                    .and_then(Value::as_str)
                    .is_some_and(|nib| !nib.is_empty())
                {
                    debug!(id, name, "Skipping class loaded from an external nib");
                    continue;
                }
                if class != CUSTOM_OBJECT_CLASS {
                    mapper.type_name(class)
                } else {
                    mapper.object_type()
                }
            }
            Node::Reference { .. } => mapper.object_type(),
        };

        let mut declaration = TypeDeclaration::registered(name, &register);
        declaration.set_base_type_hint(base_type);
        if types.insert(id, declaration).is_some() {
            debug!(id, name, "Duplicate object identity, keeping the later record");
        }
    }
    types
}
