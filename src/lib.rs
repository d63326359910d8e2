//! # nibgen - Code-Behind Generation for Interface Documents
//!
//! **nibgen** reads the object graph of an interface-builder document and produces
//! partial class declarations for the objects the designer gave custom classes: one
//! private property per outlet, one partial method stub per action.
//!
//! ## Core Workflow
//!
//! The generator never parses markup. It works on a `Document`, an arena of nodes
//! linked by references, which any deserializer can build:
//!
//! 1.  **Load Your Document**: Parse the interface file with your own reader, or use the
//!     JSON interchange format in [`document::interchange`].
//! 2.  **Convert**: Implement [`document::IntoDocument`] for your parsed form.
//! 3.  **Generate**: Build a [`Generator`] with `Generator::builder()` and call
//!     `generate`. The result is a list of language-neutral [`codegen::TypeDeclaration`]s.
//! 4.  **Emit**: Render them with [`emit::CSharpEmitter`] or your own emitter.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nibgen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("MainWindow.xib.json")?;
//!     let document = document_from_json(&json)?;
//!
//!     let generator = Generator::builder().build();
//!     let declarations = generator.generate(&document)?;
//!
//!     for declaration in &declarations {
//!         println!("{}: {} members", declaration.name, declaration.members.len());
//!     }
//!
//!     let source = CSharpEmitter::default().emit_compile_unit(&declarations, Some("MyApp"))?;
//!     println!("{}", source);
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod document;
pub mod emit;
pub mod error;
pub mod generator;
pub mod prelude;

pub use generator::{Generator, GeneratorBuilder, GeneratorOptions};
