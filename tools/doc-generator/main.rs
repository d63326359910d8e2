use clap::Parser;
use nibgen::document::interchange::{RawDocument, RawNode};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use serde_json::{Map, Value as Json, json};
use std::fs;

/// A CLI tool to generate synthetic interface documents for nibgen
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_document.json")]
    output: String,

    /// Number of custom controller classes (each a proxy-owned view hierarchy)
    #[arg(long, default_value_t = 3)]
    controllers: usize,

    /// Number of widgets placed in each controller's view
    #[arg(long, default_value_t = 20)]
    widgets: usize,

    /// Number of action connections per controller
    #[arg(long, default_value_t = 10)]
    actions: usize,
}

const WIDGET_CLASSES: &[&str] = &[
    "IBUILabel",
    "IBUIButton",
    "IBUITextField",
    "IBUIImageView",
    "IBUISwitch",
    "IBUISlider",
    "IBMKMapView",
    "IBUIView",
];

const ACTION_LABELS: &[&str] = &["onTap:", "valueChanged:", "didFinishEditing:", "refresh:"];

/// Accumulates nodes and records while the document is being built.
#[derive(Default)]
struct DocumentSketch {
    nodes: Vec<RawNode>,
    next_id: i64,
    next_connection_id: i64,
    object_records: Vec<Json>,
    connection_records: Vec<Json>,
    custom_classes: Vec<Json>,
    partial_classes: Vec<Json>,
}

impl DocumentSketch {
    /// Adds an object plus a reference wrapping it and returns the reference's index.
    fn add_object(&mut self, node: RawNode) -> usize {
        self.nodes.push(node);
        let target = self.nodes.len() - 1;
        self.nodes.push(RawNode::Reference {
            id: None,
            target: json!({ "$node": target }),
        });
        self.nodes.len() - 1
    }

    fn fresh_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn record_object(&mut self, id: i64, reference: usize) {
        self.object_records.push(json!({
            "$object": { "objectId": id, "object": { "$node": reference } }
        }));
    }

    fn assign_class(&mut self, id: i64, class_name: &str) {
        self.custom_classes
            .push(json!([format!("{}.CustomClassName", id), class_name]));
        self.partial_classes
            .push(json!({ "$partialClass": { "className": class_name } }));
    }

    fn connect(&mut self, kind: &str, label: &str, source: usize, destination: usize) {
        self.next_connection_id += 1;
        self.connection_records.push(json!({
            "$connection": {
                "connectionId": self.next_connection_id,
                "kind": kind,
                "label": label,
                "source": { "$node": source },
                "destination": { "$node": destination },
            }
        }));
    }

    fn finish(self) -> RawDocument {
        let mut objects = Map::new();
        objects.insert(
            "connectionRecords".to_string(),
            Json::Array(self.connection_records),
        );
        objects.insert(
            "objectRecords".to_string(),
            json!({ "$orderedSet": self.object_records }),
        );
        objects.insert(
            "flattenedProperties".to_string(),
            json!({ "$dictionary": self.custom_classes }),
        );

        let mut properties = Map::new();
        properties.insert("IBDocument.Objects".to_string(), Json::Object(objects));
        properties.insert(
            "IBDocument.Classes".to_string(),
            json!({ "referencedPartialClassDescriptions": self.partial_classes }),
        );
        RawDocument {
            nodes: self.nodes,
            properties,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating document ({} controllers, {} widgets and {} actions each)...",
        cli.controllers, cli.widgets, cli.actions
    );

    let mut sketch = DocumentSketch::default();
    for controller in 0..cli.controllers {
        generate_controller(&mut sketch, &mut rng, controller, &cli);
    }
    let document = sketch.finish();

    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} nodes and saved the document to '{}'",
        document.nodes.len(),
        cli.output
    );

    Ok(())
}

fn generate_controller(sketch: &mut DocumentSketch, rng: &mut ThreadRng, index: usize, cli: &Cli) {
    let owner_id = sketch.fresh_id();
    let owner = sketch.add_object(RawNode::Proxy {
        id: Some(owner_id),
        properties: Map::new(),
    });
    sketch.record_object(owner_id, owner);
    sketch.assign_class(owner_id, &format!("GeneratedController{}", index));

    let mut buttons = Vec::new();
    for widget in 0..cli.widgets {
        let class = *WIDGET_CLASSES.choose(rng).unwrap_or(&"IBUIView");
        let id = sketch.fresh_id();
        let reference = sketch.add_object(RawNode::Generic {
            id: Some(id),
            class: class.to_string(),
            properties: Map::new(),
        });
        sketch.record_object(id, reference);
        if class == "IBUIButton" {
            buttons.push(reference);
        }
        // Roughly half the widgets get an outlet on the controller.
        if rng.random_bool(0.5) {
            sketch.connect("outlet", &format!("widget{}", widget), owner, reference);
        }
    }

    if buttons.is_empty() {
        return;
    }
    for _ in 0..cli.actions {
        let label = *ACTION_LABELS.choose(rng).unwrap_or(&"onTap:");
        let sender = buttons[rng.random_range(0..buttons.len())];
        sketch.connect("action", label, sender, owner);
    }
    println!(
        "-> Generated controller {} with {} buttons.",
        index,
        buttons.len()
    );
}
