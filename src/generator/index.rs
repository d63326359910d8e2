use super::options::GeneratorOptions;
use crate::document::{Document, Node, ObjectId, Value};
use ahash::{AHashMap, AHashSet};
use tracing::{debug, trace};

const FLATTENED_PROPERTIES_KEY: &str = "flattenedProperties";
const CUSTOM_CLASS_SUFFIX: &str = ".CustomClassName";
const PARTIAL_CLASSES_KEY: &str = "referencedPartialClassDescriptions";

/// The two lookups that decide which objects become partial classes.
#[derive(Debug, Default)]
pub(super) struct ClassIndex {
    /// Object identity to the custom class name the designer assigned it.
    pub custom_classes: AHashMap<ObjectId, String>,
    /// Class names the document's own catalogue wants partial declarations for.
    pub approved: AHashSet<String>,
}

impl ClassIndex {
    pub(super) fn build(document: &Document, objects: &Node, options: &GeneratorOptions) -> Self {
        Self {
            custom_classes: collect_custom_classes(objects, options),
            approved: collect_approved_classes(document),
        }
    }

    /// The custom class of `object_id`, if it has one and the catalogue approves it.
    pub(super) fn approved_class(&self, object_id: ObjectId) -> Option<&str> {
        self.custom_classes
            .get(&object_id)
            .map(String::as_str)
            .filter(|name| self.approved.contains(*name))
    }
}

/// Scans `flattenedProperties` for `<id>.CustomClassName` entries.
fn collect_custom_classes(
    objects: &Node,
    options: &GeneratorOptions,
) -> AHashMap<ObjectId, String> {
    let mut class_names = AHashMap::new();
    let Some(pairs) = objects
        .property(FLATTENED_PROPERTIES_KEY)
        .and_then(Value::as_dictionary)
    else {
        debug!("Document has no flattened properties, no custom classes");
        return class_names;
    };

    for (key, value) in pairs {
        let Some(key) = key.as_str() else { continue };
        if !key.ends_with(CUSTOM_CLASS_SUFFIX) {
            continue;
        }
        let id = key
            .split_once('.')
            .and_then(|(id, _)| id.parse::<ObjectId>().ok());
        let (Some(id), Some(name)) = (id, value.as_str()) else {
            debug!(key, "Skipping malformed custom class entry");
            continue;
        };
        if options.is_reserved(name) {
            trace!(id, name, "Skipping reserved root class");
            continue;
        }
        class_names.insert(id, name.to_string());
    }
    class_names
}

/// Collects the non-empty class names of the catalogue's partial class descriptions.
/// A document without a catalogue approves nothing.
fn collect_approved_classes(document: &Document) -> AHashSet<String> {
    let Some(descriptions) = document
        .classes()
        .and_then(|classes| classes.property(PARTIAL_CLASSES_KEY))
        .and_then(Value::as_collection)
    else {
        debug!("Document has no class catalogue, no classes are approved");
        return AHashSet::new();
    };

    descriptions
        .iter()
        .filter_map(|value| match value {
            Value::PartialClass(description) => description.class_name.as_deref(),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
