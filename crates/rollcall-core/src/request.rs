//! Audience request variants.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The scope an audience is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum AudienceRequest {
  /// Everyone reachable through a single activity group.
  Group { group_id: Uuid },
  /// Everyone reachable through every group filed anywhere under a
  /// category subtree.
  CategorySubtree { category_id: Uuid },
  /// Restricted to the members of one group who participate in a specific
  /// event occurrence (plus their guardians and the group's staff).
  EventParticipation { event_id: Uuid, group_id: Uuid },
}
