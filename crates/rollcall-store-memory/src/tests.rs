//! Tests for `MemoryStore` against the `DirectoryStore` contract.

use chrono::Utc;
use uuid::Uuid;

use rollcall_core::{
  category::CategoryNode,
  event::EventOccurrence,
  group::ActivityGroup,
  person::{Member, Person},
  store::DirectoryStore,
};

use crate::MemoryStore;

fn person(name: &str) -> Person {
  Person {
    person_id:             Uuid::new_v4(),
    first_name:            name.into(),
    last_name:             "Example".into(),
    email_addresses:       vec![format!("{}@school.example", name.to_lowercase())],
    receive_notifications: true,
    receive_emails:        true,
  }
}

fn group(name: &str) -> ActivityGroup {
  ActivityGroup {
    group_id: Uuid::new_v4(),
    name:     name.into(),
    members:  vec![Member { person: person("Alice"), guardians: vec![] }],
    staff:    vec![person("Taylor")],
  }
}

// ─── Categories ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn category_roundtrip() {
  let mut store = MemoryStore::new();
  let node = CategoryNode {
    category_id:   Uuid::new_v4(),
    name:          "Sports".into(),
    subcategories: vec![Uuid::new_v4()],
    groups:        vec![],
  };
  store.insert_category(node.clone());

  let fetched = store.category_node(node.category_id).await.unwrap().unwrap();
  assert_eq!(fetched.category_id, node.category_id);
  assert_eq!(fetched.subcategories, node.subcategories);
  assert!(fetched.is_branch());
}

#[tokio::test]
async fn category_missing_returns_none() {
  let store = MemoryStore::new();
  assert!(store.category_node(Uuid::new_v4()).await.unwrap().is_none());
}

// ─── Groups ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn group_roundtrip_with_relations() {
  let mut store = MemoryStore::new();
  let g = group("Soccer");
  store.insert_group(g.clone());

  let fetched = store.group_with_relations(g.group_id).await.unwrap().unwrap();
  assert_eq!(fetched.group_id, g.group_id);
  assert_eq!(fetched.members.len(), 1);
  assert_eq!(fetched.staff.len(), 1);
}

#[tokio::test]
async fn group_missing_returns_none() {
  let store = MemoryStore::new();
  assert!(
    store
      .group_with_relations(Uuid::new_v4())
      .await
      .unwrap()
      .is_none()
  );
}

// ─── Events ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn event_participation_keyed_by_event_and_group() {
  let mut store = MemoryStore::new();
  let g = group("Swimming");
  let event_id = Uuid::new_v4();
  let attending = g.members[0].person.person_id;
  store.insert_event(EventOccurrence {
    event_id,
    group_id: g.group_id,
    starts_at: Utc::now(),
    participants: vec![attending],
  });

  let fetched = store
    .event_participation(event_id, g.group_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fetched.participants, vec![attending]);

  // Same event, different group: no record.
  assert!(
    store
      .event_participation(event_id, Uuid::new_v4())
      .await
      .unwrap()
      .is_none()
  );
}
