pub mod conversion;
pub mod graph;
pub mod interchange;
pub mod node;
pub mod record;

pub use conversion::*;
pub use graph::*;
pub use interchange::{RawDocument, document_from_json};
pub use node::*;
pub use record::*;
