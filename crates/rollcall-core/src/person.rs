//! People and the links between them.
//!
//! Learners, guardians, and staff share one identity space: `person_id` is
//! the sole identity key, and a guardian of one learner may appear as staff
//! of another group. Consumers must never treat two records with the same id
//! as different people, even if other fields differ across the paths that
//! discovered them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person known to the school directory.
///
/// The two `receive_*` flags are the person's own communication-consent
/// settings. Whether they are honored verbatim or overridden depends on the
/// role the person plays in a given audience (see `rollcall-audience`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
  pub person_id:             Uuid,
  pub first_name:            String,
  pub last_name:             String,
  /// May be empty; a person with no address can still receive in-app
  /// notifications.
  pub email_addresses:       Vec<String>,
  /// Consent to in-app notifications.
  pub receive_notifications: bool,
  /// Consent to email notifications.
  pub receive_emails:        bool,
}

/// A guardian attached to a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardianLink {
  pub guardian:         Person,
  /// Whether contacting this guardian requires explicit consent on file.
  /// Carried domain data; audience expansion uses the guardian's own
  /// `receive_*` flags and does not consult this field.
  pub consent_required: bool,
}

/// A learner enrolled in an activity group, with their guardian links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
  pub person:    Person,
  pub guardians: Vec<GuardianLink>,
}
