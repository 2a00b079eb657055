//! The `DirectoryStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `rollcall-store-memory`). The audience engine depends on this
//! abstraction, not on any concrete backend; persistence, querying, and
//! transaction concerns live entirely behind it.

use std::future::Future;

use uuid::Uuid;

use crate::{category::CategoryNode, event::EventOccurrence, group::ActivityGroup};

/// Read access to the school directory, as the audience engine needs it.
///
/// Every fetch is eager: a returned node or group carries the full relation
/// graph (attached groups, members, guardian links, staff) so the engine
/// never issues follow-up lookups per person. `Ok(None)` means not-found;
/// `Err` is a backend failure and aborts the resolution that issued it.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait DirectoryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch one category node with its subcategory ids and directly attached
  /// groups.
  fn category_node(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<CategoryNode>, Self::Error>> + Send + '_;

  /// Fetch one activity group with members, guardian links, and staff
  /// attached.
  fn group_with_relations(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<ActivityGroup>, Self::Error>> + Send + '_;

  /// Fetch the participation record for `group_id` at `event_id`.
  fn event_participation(
    &self,
    event_id: Uuid,
    group_id: Uuid,
  ) -> impl Future<Output = Result<Option<EventOccurrence>, Self::Error>> + Send + '_;
}
