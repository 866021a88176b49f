//! Id renumbering applied after a deletion keeps the id sequence dense.

use super::{Contact, ContactId};

/// Decrement the id of every contact whose id exceeds `deleted`.
///
/// The pass is order preserving and must run on the already-filtered
/// collection, so every comparison sees an original id.
///
/// # Examples
/// ```
/// use contacts_backend::domain::{Contact, ContactId, shift_ids_after_delete};
///
/// let remaining = vec![
///     Contact::from_parts(1, "Ada", "Lovelace", "ada@example.org"),
///     Contact::from_parts(3, "Alan", "Turing", "alan@example.org"),
/// ];
/// let deleted = ContactId::new(2).expect("id");
/// let shifted = shift_ids_after_delete(remaining, deleted);
/// let ids: Vec<u32> = shifted.iter().map(|c| c.id()).collect();
/// assert_eq!(ids, vec![1, 2]);
/// ```
#[must_use]
pub fn shift_ids_after_delete(contacts: Vec<Contact>, deleted: ContactId) -> Vec<Contact> {
    contacts
        .into_iter()
        .map(|contact| {
            if contact.id() > deleted.get() {
                let shifted = contact.id() - 1;
                contact.with_id(shifted)
            } else {
                contact
            }
        })
        .collect()
}

/// Remove every contact carrying `id`, then renumber the rest.
///
/// Returns `None` when nothing matched, leaving the caller's collection
/// untouched so it is never persisted.
#[must_use]
pub fn remove_and_renumber(contacts: &[Contact], id: ContactId) -> Option<Vec<Contact>> {
    let remaining: Vec<Contact> = contacts
        .iter()
        .filter(|contact| !contact.has_id(id))
        .cloned()
        .collect();
    if remaining.len() == contacts.len() {
        return None;
    }
    Some(shift_ids_after_delete(remaining, id))
}
