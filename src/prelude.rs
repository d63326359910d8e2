//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the nibgen crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use nibgen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/document.json")?;
//! let document = document_from_json(&json)?;
//! let declarations = Generator::builder().build().generate(&document)?;
//! println!("Generated {} classes", declarations.len());
//! # Ok(())
//! # }
//! ```

// Generation
pub use crate::generator::{Generator, GeneratorBuilder, GeneratorOptions, TypeMapper};

// Document model
pub use crate::document::{
    Connection, ConnectionRecord, Document, IntoDocument, Node, NodeIndex, ObjectId,
    ObjectRecord, PartialClassDescription, PropertyBag, Value, document_from_json,
};

// Code model
pub use crate::codegen::{
    Accessor, ActionMethod, Attribute, Member, OutletProperty, TypeDeclaration, TypeRef,
    Visibility,
};

// Emitters
pub use crate::emit::{CSharpEmitter, MemberFormatter};

// Error types
pub use crate::error::{DocumentError, EmitError, GenerateError, OptionsError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
