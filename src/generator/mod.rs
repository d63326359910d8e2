use crate::codegen::TypeDeclaration;
use crate::document::Document;
use crate::emit::{CSharpEmitter, MemberFormatter};
use crate::error::GenerateError;
use tracing::debug;

mod grouping;
mod index;
mod members;
pub mod naming;
pub mod options;
mod synthesizer;

use grouping::{connection_records, group_connections};
use index::ClassIndex;
use members::MemberEmitter;
pub use naming::TypeMapper;
pub use options::GeneratorOptions;
use synthesizer::synthesize_types;

/// Turns a document graph into partial class declarations with outlets and actions.
///
/// A `Generator` holds no per-document state and can be reused for any number of
/// documents.
pub struct Generator {
    options: GeneratorOptions,
    mapper: TypeMapper,
    formatter: Option<Box<dyn MemberFormatter>>,
}

pub struct GeneratorBuilder {
    options: GeneratorOptions,
    formatter: Option<Box<dyn MemberFormatter>>,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self {
            options: GeneratorOptions::default(),
            formatter: Some(Box::new(CSharpEmitter::default())),
        }
    }

    /// Replaces every option, including those set by earlier `with_*` calls. Call it
    /// first and refine with the other builder methods afterwards.
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_root_namespace(mut self, root: &str) -> Self {
        self.options.root_namespace = root.to_string();
        self
    }

    /// Maps classes tagged `IB<prefix>…` into the binding module `module`.
    pub fn with_family_namespace(mut self, prefix: &str, module: &str) -> Self {
        self.options
            .family_namespaces
            .insert(prefix.to_string(), module.to_string());
        self
    }

    pub fn with_reserved_class(mut self, class_name: &str) -> Self {
        if !self.options.is_reserved(class_name) {
            self.options.reserved_class_names.push(class_name.to_string());
        }
        self
    }

    /// Replaces the formatter used for action stub listings.
    pub fn with_member_formatter(mut self, formatter: Box<dyn MemberFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn without_stub_notes(mut self) -> Self {
        self.options.action_stub_notes = false;
        self
    }

    pub fn build(self) -> Generator {
        let formatter = if self.options.action_stub_notes {
            self.formatter
        } else {
            None
        };
        Generator {
            mapper: TypeMapper::new(&self.options),
            options: self.options,
            formatter,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn mapper(&self) -> &TypeMapper {
        &self.mapper
    }

    /// Generates the partial classes for `document`, in document order.
    ///
    /// Documents without an objects container or connection records produce no
    /// declarations. The only failure is a connection whose owning endpoint has no
    /// object identity, which aborts the whole document.
    pub fn generate(&self, document: &Document) -> Result<Vec<TypeDeclaration>, GenerateError> {
        let Some(objects) = document.objects() else {
            debug!("Document has no objects container, nothing to generate");
            return Ok(Vec::new());
        };
        let Some(records) = connection_records(objects) else {
            debug!("Document has no connection records, nothing to generate");
            return Ok(Vec::new());
        };

        let groups = group_connections(document, records)?;
        let index = ClassIndex::build(document, objects, &self.options);
        let mut types = synthesize_types(document, objects, &index, &self.mapper);
        debug!(
            classes = types.len(),
            owners = groups.len(),
            "Synthesized partial classes"
        );

        let emitter = MemberEmitter {
            document,
            mapper: &self.mapper,
            formatter: self.formatter.as_deref(),
        };
        for (owner, wires) in &groups {
            match types.get_mut(owner) {
                Some(declaration) => emitter.emit(declaration, wires),
                None => debug!(owner, "Connections target an object without a partial class"),
            }
        }

        Ok(types.into_values().collect())
    }
}
