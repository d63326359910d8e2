use super::declaration::Attribute;
use super::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    Private,
}

/// A member attached to a generated partial class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Outlet(OutletProperty),
    Action(ActionMethod),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Outlet(outlet) => &outlet.name,
            Member::Action(action) => &action.name,
        }
    }

    pub fn as_outlet(&self) -> Option<&OutletProperty> {
        match self {
            Member::Outlet(outlet) => Some(outlet),
            Member::Action(_) => None,
        }
    }

    pub fn as_action(&self) -> Option<&ActionMethod> {
        match self {
            Member::Action(action) => Some(action),
            Member::Outlet(_) => None,
        }
    }
}

/// How a property accessor reaches the native instance variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Accessor {
    /// `return (cast) this.GetNativeField(field);`
    GetNativeField { field: String, cast: TypeRef },
    /// `this.SetNativeField(field, value);`
    SetNativeField { field: String },
}

/// An outlet property. Storage goes through the native field accessors rather than a
/// backing field, matching how the runtime binds instance variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletProperty {
    pub name: String,
    pub type_ref: TypeRef,
    pub visibility: Visibility,
    pub attribute: Attribute,
    pub getter: Accessor,
    pub setter: Accessor,
}

impl OutletProperty {
    pub fn new(name: &str, type_ref: TypeRef, connect_attribute: &str) -> Self {
        Self {
            name: name.to_string(),
            getter: Accessor::GetNativeField {
                field: name.to_string(),
                cast: type_ref.clone(),
            },
            setter: Accessor::SetNativeField {
                field: name.to_string(),
            },
            type_ref,
            visibility: Visibility::Private,
            attribute: Attribute::new(connect_attribute, name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_ref: TypeRef,
}

/// A partial action method declaration. It has no body; the user supplies the
/// implementation in their half of the partial class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionMethod {
    /// The callable name: the selector without its trailing `:`.
    pub name: String,
    /// The original selector, including the separator.
    pub selector: String,
    pub sender: Parameter,
    pub attribute: Attribute,
}

impl ActionMethod {
    pub fn new(selector: &str, sender_type: TypeRef, export_attribute: &str) -> Self {
        let name = selector.strip_suffix(':').unwrap_or(selector);
        Self {
            name: name.to_string(),
            selector: selector.to_string(),
            sender: Parameter {
                name: "sender".to_string(),
                type_ref: sender_type,
            },
            attribute: Attribute::new(export_attribute, selector),
        }
    }
}
