use super::grouping::Wire;
use super::naming::TypeMapper;
use crate::codegen::{ActionMethod, Member, OutletProperty, TypeDeclaration, TypeRef};
use crate::document::{Document, Node, Value};
use crate::emit::MemberFormatter;
use indexmap::IndexMap;
use itertools::{Either, Itertools};
use tracing::warn;

const ACTION_STUBS_HEADER: &str = "Action method stubs:\n\n";

/// Attaches outlet properties and action stubs to one declaration.
pub(super) struct MemberEmitter<'a> {
    pub document: &'a Document,
    pub mapper: &'a TypeMapper,
    pub formatter: Option<&'a dyn MemberFormatter>,
}

impl MemberEmitter<'_> {
    pub(super) fn emit(&self, declaration: &mut TypeDeclaration, wires: &[Wire<'_>]) {
        let (actions, outlets): (Vec<_>, Vec<_>) = wires.iter().partition_map(|wire| match *wire {
            Wire::Action { label, sender } => Either::Left((label, sender)),
            Wire::Outlet { label, widget } => Either::Right((label, widget)),
        });

        // One method per selector, however many controls send it.
        let mut by_label: IndexMap<&str, Vec<&Value>> = IndexMap::new();
        for (label, sender) in actions {
            by_label.entry(label).or_default().push(sender);
        }
        for (label, senders) in by_label {
            let sender_type = self.common_sender_type(&senders);
            self.add_action(declaration, label, sender_type);
        }

        // Outlets are never merged, even when two share a label.
        let connect = self.mapper.connect_attribute();
        for (label, widget) in outlets {
            let widget_type = match self.document.resolve_node(widget) {
                Some(Node::Generic { class, .. }) => self.mapper.type_name(class),
                _ => self.mapper.generic_object_type(),
            };
            declaration
                .members
                .push(Member::Outlet(OutletProperty::new(label, widget_type, &connect)));
        }
    }

    /// The sender type all `senders` share. The first disagreement falls back to the
    /// foundation object type; no common ancestor is searched for.
    fn common_sender_type(&self, senders: &[&Value]) -> TypeRef {
        let mut candidates = senders.iter().map(|sender| self.sender_type(sender));
        let Some(common) = candidates.next() else {
            return self.mapper.object_type();
        };
        for candidate in candidates {
            if candidate != common {
                return self.mapper.object_type();
            }
        }
        common
    }

    fn sender_type(&self, sender: &Value) -> TypeRef {
        match self.document.resolve_node(sender) {
            Some(Node::Generic { class, .. }) => self.mapper.type_name(class),
            _ => self.mapper.object_type(),
        }
    }

    fn add_action(&self, declaration: &mut TypeDeclaration, label: &str, sender_type: TypeRef) {
        let member = Member::Action(ActionMethod::new(
            label,
            sender_type,
            &self.mapper.export_attribute(),
        ));

        if let Some(formatter) = self.formatter {
            let mut listing = String::from(ACTION_STUBS_HEADER);
            match formatter.format_member(&member, &mut listing) {
                Ok(()) => {
                    listing.push('\n');
                    declaration.comments.push(listing);
                }
                Err(e) => warn!(
                    class = %declaration.name,
                    label,
                    error = %e,
                    "Could not format action stub listing"
                ),
            }
        }

        declaration.members.push(member);
    }
}
