//! Tests for the contact service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{
    CONTACT_DELETED_MESSAGE, InMemoryContactRepository, MockContactRepository,
};
use crate::domain::{EmailAddress, ErrorCode, PersonName};
use rstest::{fixture, rstest};

fn contact(id: u32, first: &str, last: &str, email: &str) -> Contact {
    Contact::from_parts(id, first, last, email)
}

fn id(value: u32) -> ContactId {
    ContactId::new(value).expect("valid id")
}

fn new_contact(first: &str, last: &str, email: &str) -> NewContact {
    NewContact {
        first_name: PersonName::new(first).expect("first name"),
        last_name: PersonName::new(last).expect("last name"),
        email: EmailAddress::new(email).expect("email"),
    }
}

#[fixture]
fn two_contacts() -> Vec<Contact> {
    vec![
        contact(1, "A", "B", "a@b.com"),
        contact(2, "C", "D", "c@d.com"),
    ]
}

fn in_memory(
    contacts: Vec<Contact>,
) -> (
    Arc<InMemoryContactRepository>,
    ContactService<InMemoryContactRepository>,
) {
    let repo = Arc::new(InMemoryContactRepository::new(contacts));
    let service = ContactService::new(repo.clone());
    (repo, service)
}

fn mocked(repo: MockContactRepository) -> ContactService<MockContactRepository> {
    ContactService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn list_returns_collection_in_persisted_order(two_contacts: Vec<Contact>) {
    let (_, service) = in_memory(two_contacts.clone());
    let listed = service.list().await.expect("list succeeds");
    assert_eq!(listed, two_contacts);
}

#[rstest]
#[tokio::test]
async fn list_twice_without_mutation_is_identical(two_contacts: Vec<Contact>) {
    let (_, service) = in_memory(two_contacts);
    let first = service.list().await.expect("first list");
    let second = service.list().await.expect("second list");
    assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn get_finds_contact_by_id(two_contacts: Vec<Contact>) {
    let (_, service) = in_memory(two_contacts);
    let found = service.get(id(2)).await.expect("contact found");
    assert_eq!(found, contact(2, "C", "D", "c@d.com"));
}

#[rstest]
#[case(1)]
#[case(7)]
#[tokio::test]
async fn get_on_empty_collection_is_not_found(#[case] raw_id: u32) {
    let (_, service) = in_memory(Vec::new());
    let err = service.get(id(raw_id)).await.expect_err("not found");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), CONTACT_NOT_FOUND_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn create_assigns_length_plus_one(two_contacts: Vec<Contact>) {
    let (repo, service) = in_memory(two_contacts);
    let created = service
        .create(new_contact("E", "F", "e@f.com"))
        .await
        .expect("create succeeds");

    assert_eq!(created, contact(3, "E", "F", "e@f.com"));
    assert_eq!(repo.snapshot().last(), Some(&created));
}

#[rstest]
#[tokio::test]
async fn sequential_creates_yield_unique_positional_ids() {
    let (repo, service) = in_memory(Vec::new());
    for n in 0..6 {
        service
            .create(new_contact("N", &format!("L{n}"), &format!("n{n}@mail.com")))
            .await
            .expect("create succeeds");
    }

    let stored = repo.snapshot();
    for (position, stored_contact) in stored.iter().enumerate() {
        assert_eq!(stored_contact.id() as usize, position + 1);
    }
}

#[rstest]
#[tokio::test]
async fn concurrent_creates_do_not_share_an_id() {
    let (repo, service) = in_memory(Vec::new());
    let service = Arc::new(service);

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create(new_contact("P", &format!("Q{n}"), &format!("p{n}@q.com")))
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.expect("task joins").expect("create succeeds");
    }

    let mut ids: Vec<u32> = repo.snapshot().iter().map(Contact::id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
}

#[rstest]
#[tokio::test]
async fn update_merges_patch_fields(two_contacts: Vec<Contact>) {
    let (repo, service) = in_memory(two_contacts);
    let patch = ContactPatch {
        last_name: Some(PersonName::new("Z").expect("name")),
        ..ContactPatch::default()
    };

    let merged = service.update(id(2), patch).await.expect("update succeeds");
    assert_eq!(merged, contact(2, "C", "Z", "c@d.com"));
    assert_eq!(repo.snapshot()[1], merged);
    assert_eq!(repo.snapshot()[0], contact(1, "A", "B", "a@b.com"));
}

#[rstest]
#[tokio::test]
async fn update_email_only_keeps_names(two_contacts: Vec<Contact>) {
    let (_, service) = in_memory(two_contacts);
    let patch = ContactPatch {
        email: Some(EmailAddress::new("x@y.com").expect("email")),
        ..ContactPatch::default()
    };

    let merged = service.update(id(1), patch).await.expect("update succeeds");
    assert_eq!(merged, contact(1, "A", "B", "x@y.com"));
}

#[rstest]
#[tokio::test]
async fn update_missing_contact_is_not_found_and_not_saved() {
    let mut repo = MockContactRepository::new();
    repo.expect_load()
        .times(1)
        .return_once(|| Ok(vec![contact(1, "A", "B", "a@b.com")]));
    repo.expect_save().times(0);

    let err = mocked(repo)
        .update(id(4), ContactPatch::default())
        .await
        .expect_err("not found");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_first_of_two_renumbers_remaining(two_contacts: Vec<Contact>) {
    let (repo, service) = in_memory(two_contacts);
    let outcome = service.delete(id(1)).await.expect("delete succeeds");

    let expected = vec![contact(1, "C", "D", "c@d.com")];
    assert_eq!(outcome.message, CONTACT_DELETED_MESSAGE);
    assert_eq!(outcome.updated_contacts, expected);
    assert_eq!(repo.snapshot(), expected);
}

#[rstest]
#[tokio::test]
async fn delete_missing_contact_leaves_store_untouched(two_contacts: Vec<Contact>) {
    let mut repo = MockContactRepository::new();
    let seeded = two_contacts.clone();
    repo.expect_load().times(1).return_once(move || Ok(seeded));
    repo.expect_save().times(0);

    let err = mocked(repo).delete(id(3)).await.expect_err("not found");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(
        err.details()
            .and_then(|details| details.get("id"))
            .and_then(serde_json::Value::as_u64),
        Some(3)
    );
}

#[rstest]
#[tokio::test]
async fn delete_then_create_reuses_the_tail_id(two_contacts: Vec<Contact>) {
    let (repo, service) = in_memory(two_contacts);
    service.delete(id(1)).await.expect("delete succeeds");
    let created = service
        .create(new_contact("E", "F", "e@f.com"))
        .await
        .expect("create succeeds");

    assert_eq!(created.id(), 2);
    let ids: Vec<u32> = repo.snapshot().iter().map(Contact::id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[rstest]
#[tokio::test]
async fn read_failure_maps_to_internal_error() {
    let mut repo = MockContactRepository::new();
    repo.expect_load()
        .times(1)
        .return_once(|| Err(ContactRepositoryError::read("permission denied")));

    let err = mocked(repo).list().await.expect_err("read fails");
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Failed to read data");
    assert_eq!(
        err.details()
            .and_then(|details| details.get("code"))
            .and_then(serde_json::Value::as_str),
        Some("storage_read_failed")
    );
}

#[rstest]
#[tokio::test]
async fn write_failure_on_create_maps_to_internal_error() {
    let mut repo = MockContactRepository::new();
    repo.expect_load().times(1).return_once(|| Ok(Vec::new()));
    repo.expect_save()
        .withf(|contacts: &[Contact]| contacts.len() == 1)
        .times(1)
        .return_once(|_| Err(ContactRepositoryError::write("disk full")));

    let err = mocked(repo)
        .create(new_contact("E", "F", "e@f.com"))
        .await
        .expect_err("write fails");
    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Failed to save data");
}

#[rstest]
#[tokio::test]
async fn read_failure_on_delete_skips_save() {
    let mut repo = MockContactRepository::new();
    repo.expect_load()
        .times(1)
        .return_once(|| Err(ContactRepositoryError::read("not valid JSON")));
    repo.expect_save().times(0);

    let err = mocked(repo).delete(id(1)).await.expect_err("read fails");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn stored_records_are_served_without_revalidation() {
    let legacy = vec![contact(1, "  ", "B", "legacy")];
    let (_, service) = in_memory(legacy.clone());

    assert_eq!(service.list().await.expect("list succeeds"), legacy);
    assert_eq!(service.get(id(1)).await.expect("get succeeds"), legacy[0]);
}

#[rstest]
#[tokio::test]
async fn delete_keeps_untouched_records_verbatim() {
    let (repo, service) = in_memory(vec![
        contact(1, " Ada ", "Lovelace ", " ada@example.org"),
        contact(2, "C", "D", "c@d.com"),
    ]);

    service.delete(id(2)).await.expect("delete succeeds");

    assert_eq!(
        repo.snapshot(),
        vec![contact(1, " Ada ", "Lovelace ", " ada@example.org")]
    );
}
