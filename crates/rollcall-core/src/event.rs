//! Event participation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The participation record for one activity group at one event occurrence.
///
/// `participants` holds the person ids of the group members attending this
/// occurrence — a subset of the group's member list. Members not listed here
/// are excluded from event-scoped audiences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventOccurrence {
  pub event_id:     Uuid,
  pub group_id:     Uuid,
  pub starts_at:    DateTime<Utc>,
  pub participants: Vec<Uuid>,
}
