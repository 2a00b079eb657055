//! Activity groups — the unit an audience is expanded from.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::person::{Member, Person};

/// An activity group (a sports team, a choir, a study circle).
///
/// The group references people rather than owning them; a store returns it
/// as an eager snapshot with members, guardian links, and staff attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityGroup {
  pub group_id: Uuid,
  pub name:     String,
  pub members:  Vec<Member>,
  /// Supervising staff (teachers, coaches). May be empty.
  pub staff:    Vec<Person>,
}
