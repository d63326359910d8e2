pub mod declaration;
pub mod member;
pub mod type_ref;

pub use declaration::*;
pub use member::*;
pub use type_ref::*;
