//! [`MemoryStore`] — the in-memory implementation of [`DirectoryStore`].

use std::{collections::HashMap, convert::Infallible};

use uuid::Uuid;

use rollcall_core::{
  category::CategoryNode, event::EventOccurrence, group::ActivityGroup, store::DirectoryStore,
};

/// A directory held entirely in memory.
///
/// Lookups clone the stored value, matching the eager-snapshot contract of
/// the trait. Infallible: the only failure mode a caller can observe is
/// not-found (`Ok(None)`).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  categories: HashMap<Uuid, CategoryNode>,
  groups:     HashMap<Uuid, ActivityGroup>,
  events:     HashMap<(Uuid, Uuid), EventOccurrence>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Insert (or replace) a category node, keyed by its `category_id`.
  pub fn insert_category(&mut self, node: CategoryNode) {
    self.categories.insert(node.category_id, node);
  }

  /// Insert (or replace) an activity group, keyed by its `group_id`.
  ///
  /// Groups attached to a category node travel inside that node; this map
  /// only serves direct group lookups, so a group that should be reachable
  /// both ways must be inserted both ways.
  pub fn insert_group(&mut self, group: ActivityGroup) {
    self.groups.insert(group.group_id, group);
  }

  /// Insert (or replace) a participation record, keyed by
  /// `(event_id, group_id)`.
  pub fn insert_event(&mut self, occurrence: EventOccurrence) {
    self
      .events
      .insert((occurrence.event_id, occurrence.group_id), occurrence);
  }
}

impl DirectoryStore for MemoryStore {
  type Error = Infallible;

  async fn category_node(&self, id: Uuid) -> Result<Option<CategoryNode>, Infallible> {
    Ok(self.categories.get(&id).cloned())
  }

  async fn group_with_relations(&self, id: Uuid) -> Result<Option<ActivityGroup>, Infallible> {
    Ok(self.groups.get(&id).cloned())
  }

  async fn event_participation(
    &self,
    event_id: Uuid,
    group_id: Uuid,
  ) -> Result<Option<EventOccurrence>, Infallible> {
    Ok(self.events.get(&(event_id, group_id)).cloned())
  }
}
