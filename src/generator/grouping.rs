use crate::document::{Connection, Document, Node, ObjectId, Value};
use crate::error::GenerateError;
use indexmap::IndexMap;
use tracing::trace;

const CONNECTION_RECORDS_KEY: &str = "connectionRecords";

/// A supported connection, reduced to what member generation needs.
#[derive(Debug, Clone, Copy)]
pub(super) enum Wire<'a> {
    Action { label: &'a str, sender: &'a Value },
    Outlet { label: &'a str, widget: &'a Value },
}

/// Owner identity to its connections, both in document order.
pub(super) type ConnectionGroups<'a> = IndexMap<ObjectId, Vec<Wire<'a>>>;

/// The `connectionRecords` collection of the objects container.
pub(super) fn connection_records(objects: &Node) -> Option<&[Value]> {
    objects
        .property(CONNECTION_RECORDS_KEY)
        .and_then(Value::as_collection)
}

/// Groups action and outlet connections by the identity of the object that will own
/// the generated member: the destination of an action, the source of an outlet.
///
/// Fails if an owner endpoint resolves to an object without identity; such a
/// document cannot be generated consistently.
pub(super) fn group_connections<'a>(
    document: &'a Document,
    records: &'a [Value],
) -> Result<ConnectionGroups<'a>, GenerateError> {
    let mut groups: ConnectionGroups<'a> = IndexMap::new();

    for record in records {
        let Value::ConnectionRecord(record) = record else {
            continue;
        };
        let (owner, wire) = match &record.connection {
            Connection::Action {
                label,
                source,
                destination,
            } => (
                destination,
                Wire::Action {
                    label,
                    sender: source,
                },
            ),
            Connection::Outlet {
                label,
                source,
                destination,
            } => (
                source,
                Wire::Outlet {
                    label,
                    widget: destination,
                },
            ),
            Connection::Unsupported { class } => {
                // Probably from a desktop document.
                trace!(
                    connection_id = record.connection_id,
                    class, "Skipping unsupported connection kind"
                );
                continue;
            }
        };

        let owner_id = document
            .resolve_node(owner)
            .and_then(|node| node.id())
            .ok_or(GenerateError::NullOwnerIdentity {
                connection_id: record.connection_id,
            })?;
        groups.entry(owner_id).or_default().push(wire);
    }

    Ok(groups)
}
