pub mod csharp;

pub use csharp::CSharpEmitter;

use crate::codegen::Member;
use crate::error::EmitError;

/// Renders a single generated member as source text.
///
/// The generator uses this for the informational action-stub listings it attaches to
/// each class. Implementations append to `out` and may leave partial text behind on
/// error; callers discard the buffer in that case.
pub trait MemberFormatter: Send + Sync {
    fn format_member(&self, member: &Member, out: &mut String) -> Result<(), EmitError>;
}
