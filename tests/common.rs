//! Common test utilities for building document graphs.
use nibgen::document::{CLASSES_KEY, OBJECTS_KEY};
use nibgen::prelude::*;

/// Builds a document the way the designer archives one: every object is reached
/// through a reference node, and the wiring lives in the objects container.
#[allow(dead_code)]
pub struct Fixture {
    pub document: Document,
    pub connections: Vec<Value>,
    pub object_records: Vec<Value>,
    pub flattened: Vec<(Value, Value)>,
    pub approved: Vec<Value>,
    pub with_catalogue: bool,
    pub with_connection_records: bool,
    next_connection_id: i64,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            connections: Vec::new(),
            object_records: Vec::new(),
            flattened: Vec::new(),
            approved: Vec::new(),
            with_catalogue: true,
            with_connection_records: true,
            next_connection_id: 0,
        }
    }

    /// Adds a bare node to the arena.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        self.document.add_node(node)
    }

    /// Adds a reference node pointing at `target`.
    pub fn reference(&mut self, target: NodeIndex) -> NodeIndex {
        self.document.add_node(Node::reference(None, Value::Node(target)))
    }

    /// Adds `node` plus an object record for it, declared under the node's own id.
    pub fn object(&mut self, node: Node) -> NodeIndex {
        let declared = node.id().unwrap_or(-1);
        self.object_declared_as(node, declared)
    }

    /// Adds `node` plus an object record declaring `object_id`.
    pub fn object_declared_as(&mut self, node: Node, object_id: ObjectId) -> NodeIndex {
        let index = self.add(node);
        let reference = self.reference(index);
        self.object_records.push(Value::ObjectRecord(Box::new(ObjectRecord {
            object_id,
            object: Value::Node(reference),
        })));
        index
    }

    /// Assigns a custom class name to `id` in the flattened properties.
    pub fn custom_class(&mut self, id: ObjectId, name: &str) {
        self.flattened.push((
            Value::String(format!("{}.CustomClassName", id)),
            Value::string(name),
        ));
    }

    /// Lists `name` in the document's class catalogue.
    pub fn approve(&mut self, name: &str) {
        self.approved.push(Value::PartialClass(PartialClassDescription {
            class_name: Some(name.to_string()),
        }));
    }

    /// Object, custom class and catalogue entry in one go.
    pub fn custom_object(&mut self, node: Node, class_name: &str) -> NodeIndex {
        let id = node.id().unwrap_or(-1);
        let index = self.object(node);
        self.custom_class(id, class_name);
        self.approve(class_name);
        index
    }

    pub fn connect(&mut self, connection: Connection) -> i64 {
        self.next_connection_id += 1;
        self.connections.push(Value::ConnectionRecord(Box::new(ConnectionRecord {
            connection_id: self.next_connection_id,
            connection,
        })));
        self.next_connection_id
    }

    /// An outlet whose endpoints are each wrapped in a fresh reference.
    pub fn outlet(&mut self, label: &str, owner: NodeIndex, widget: NodeIndex) -> i64 {
        let source = self.reference(owner);
        let destination = self.reference(widget);
        self.connect(Connection::outlet(label, source, destination))
    }

    /// An action whose endpoints are each wrapped in a fresh reference.
    pub fn action(&mut self, label: &str, sender: NodeIndex, owner: NodeIndex) -> i64 {
        let source = self.reference(sender);
        let destination = self.reference(owner);
        self.connect(Connection::action(label, source, destination))
    }

    pub fn build(mut self) -> Document {
        let mut container = Node::generic(None, "IBObjectContainer")
            .with_property("objectRecords", Value::OrderedSet(self.object_records))
            .with_property("flattenedProperties", Value::Dictionary(self.flattened));
        if self.with_connection_records {
            container =
                container.with_property("connectionRecords", Value::Array(self.connections));
        }
        let objects = self.document.add_node(container);
        self.document
            .properties
            .insert(OBJECTS_KEY.to_string(), Value::Node(objects));

        if self.with_catalogue {
            let describer = Node::generic(None, "IBClassDescriber").with_property(
                "referencedPartialClassDescriptions",
                Value::Array(self.approved),
            );
            let classes = self.document.add_node(describer);
            self.document
                .properties
                .insert(CLASSES_KEY.to_string(), Value::Node(classes));
        }
        self.document
    }
}

/// A view controller owner with a label outlet and a button action.
#[allow(dead_code)]
pub fn create_controller_document() -> Document {
    let mut fixture = Fixture::new();
    let owner = fixture.custom_object(Node::proxy(Some(1)), "MainViewController");
    let label = fixture.object(Node::generic(Some(10), "IBUILabel"));
    let button = fixture.object(Node::generic(Some(11), "IBUIButton"));
    fixture.outlet("statusLabel", owner, label);
    fixture.action("buttonPressed:", button, owner);
    fixture.build()
}

/// Interchange JSON for the single-label scenario: identity 5 is an `IBUILabel` with
/// custom class `MyLabel` and an outlet to itself.
#[allow(dead_code)]
pub const LABEL_DOCUMENT_JSON: &str = r#"{
  "nodes": [
    { "kind": "generic", "id": 5, "class": "IBUILabel", "properties": {} },
    { "kind": "reference", "target": { "$node": 0 } },
    { "kind": "reference", "target": { "$node": 1 } }
  ],
  "properties": {
    "IBDocument.Objects": {
      "connectionRecords": [
        { "$connection": { "connectionId": 42, "kind": "outlet", "label": "titleLabel",
                           "source": { "$node": 2 }, "destination": { "$node": 1 } } }
      ],
      "objectRecords": { "$orderedSet": [
        { "$object": { "objectId": 5, "object": { "$node": 1 } } }
      ] },
      "flattenedProperties": { "$dictionary": [
        ["5.CustomClassName", "MyLabel"],
        ["5.IBPluginDependency", "com.apple.InterfaceBuilder.IBCocoaTouchPlugin"]
      ] }
    },
    "IBDocument.Classes": {
      "referencedPartialClassDescriptions": [
        { "$partialClass": { "className": "MyLabel" } },
        { "$partialClass": { "className": "" } },
        { "$partialClass": {} }
      ]
    }
  }
}"#;
