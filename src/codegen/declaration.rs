use super::member::Member;
use super::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

/// A custom attribute with a single string argument, e.g. `[Register ("MyView")]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub argument: String,
}

impl Attribute {
    pub fn new(name: &str, argument: &str) -> Self {
        Self {
            name: name.to_string(),
            argument: argument.to_string(),
        }
    }
}

/// A partial class that will receive outlets and actions for one document object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub is_partial: bool,
    pub attributes: Vec<Attribute>,
    /// Advisory only; never checked against the members.
    pub base_type_hint: Option<TypeRef>,
    /// Informational comments, rendered above the declaration.
    pub comments: Vec<String>,
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    /// A partial class carrying the registration attribute that ties it to the
    /// document object at load time.
    pub fn registered(name: &str, register_attribute: &str) -> Self {
        Self {
            name: name.to_string(),
            is_partial: true,
            attributes: vec![Attribute::new(register_attribute, name)],
            base_type_hint: None,
            comments: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn set_base_type_hint(&mut self, hint: TypeRef) {
        self.comments
            .push(format!("Base type probably should be {} or subclass", hint));
        self.base_type_hint = Some(hint);
    }

    pub fn outlets(&self) -> impl Iterator<Item = &super::OutletProperty> {
        self.members.iter().filter_map(Member::as_outlet)
    }

    pub fn actions(&self) -> impl Iterator<Item = &super::ActionMethod> {
        self.members.iter().filter_map(Member::as_action)
    }
}
