//! Reference resolver: joins foreign-key ids to records from an already
//! fetched list. Resolution is only as fresh as that list.

use fieldops_domain::{Entity, RecordId};

/// The record in `list` whose identifier equals `id`, if any.
pub fn resolve<'a, E: Entity>(list: &'a [E], id: &RecordId) -> Option<&'a E> {
    list.iter().find(|record| record.id() == Some(id))
}

/// Display label for a single foreign key. Unset or unmatched ids render empty.
pub fn resolve_label<E: Entity>(list: &[E], id: Option<&RecordId>) -> String {
    id.and_then(|id| resolve(list, id))
        .map(Entity::label)
        .unwrap_or_default()
}

/// Labels for a many-valued foreign key, joined with `", "`. Each id resolves
/// independently; an unmatched id leaves an empty segment.
pub fn resolve_labels<E: Entity>(list: &[E], ids: &[RecordId]) -> String {
    ids.iter()
        .map(|id| resolve_label(list, Some(id)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reverse lookup for inputs that name a record by its label.
pub fn find_by_label<'a, E: Entity>(list: &'a [E], label: &str) -> Option<&'a E> {
    let label = label.trim();
    list.iter().find(|record| record.label() == label)
}
