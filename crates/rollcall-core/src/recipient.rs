//! Recipients and the deduplicated audience.
//!
//! A [`Recipient`] is a person snapshot with channel flags as resolved for
//! one audience. The flags depend on the *role* the person was discovered
//! through, not only on their personal settings:
//!
//! | Role     | In-app            | Email             |
//! |----------|-------------------|-------------------|
//! | Member   | always on         | always on         |
//! | Guardian | person's own flag | person's own flag |
//! | Staff    | always on         | never             |
//!
//! A [`RecipientAudience`] is the terminal output of the engine — a
//! first-write-wins set keyed by `person_id`, never stored, always derived.

use std::collections::HashSet;

use serde::Serialize;
use uuid::Uuid;

use crate::person::Person;

// ─── Recipient ───────────────────────────────────────────────────────────────

/// A person resolved into an audience, with the channels that may be used to
/// reach them for this notification.
#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
  pub person_id:       Uuid,
  pub first_name:      String,
  pub last_name:       String,
  pub email_addresses: Vec<String>,
  pub notify_in_app:   bool,
  pub notify_email:    bool,
}

impl Recipient {
  fn from_person(person: &Person, notify_in_app: bool, notify_email: bool) -> Self {
    Self {
      person_id: person.person_id,
      first_name: person.first_name.clone(),
      last_name: person.last_name.clone(),
      email_addresses: person.email_addresses.clone(),
      notify_in_app,
      notify_email,
    }
  }

  /// A group member. Members are always reachable on both channels,
  /// regardless of their personal `receive_*` settings.
  pub fn member(person: &Person) -> Self { Self::from_person(person, true, true) }

  /// A member's guardian. The guardian's own consent flags are taken
  /// verbatim.
  pub fn guardian(person: &Person) -> Self {
    Self::from_person(person, person.receive_notifications, person.receive_emails)
  }

  /// Supervising staff. Staff always receive in-app notifications and never
  /// email in this resolution.
  pub fn staff(person: &Person) -> Self { Self::from_person(person, true, false) }
}

// ─── Audience ────────────────────────────────────────────────────────────────

/// The deduplicated audience for one notification scope.
///
/// Insertion-ordered; the first recipient inserted for a given `person_id`
/// wins, and any later candidate with the same id is discarded whole — its
/// flags and addresses are *not* merged with the first. Callers rely on this
/// insertion-order behavior.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RecipientAudience {
  recipients: Vec<Recipient>,
  #[serde(skip)]
  seen:       HashSet<Uuid>,
}

impl RecipientAudience {
  pub fn new() -> Self { Self::default() }

  /// Insert a candidate. Returns `true` if the recipient was added, `false`
  /// if a recipient with the same `person_id` was already present.
  pub fn insert(&mut self, recipient: Recipient) -> bool {
    if !self.seen.insert(recipient.person_id) {
      return false;
    }
    self.recipients.push(recipient);
    true
  }

  pub fn contains(&self, person_id: Uuid) -> bool { self.seen.contains(&person_id) }

  pub fn get(&self, person_id: Uuid) -> Option<&Recipient> {
    self.recipients.iter().find(|r| r.person_id == person_id)
  }

  pub fn len(&self) -> usize { self.recipients.len() }

  pub fn is_empty(&self) -> bool { self.recipients.is_empty() }

  pub fn iter(&self) -> impl Iterator<Item = &Recipient> { self.recipients.iter() }

  /// Consume the audience, yielding recipients in discovery order.
  pub fn into_recipients(self) -> Vec<Recipient> { self.recipients }
}

impl FromIterator<Recipient> for RecipientAudience {
  fn from_iter<I: IntoIterator<Item = Recipient>>(candidates: I) -> Self {
    let mut audience = Self::new();
    for candidate in candidates {
      audience.insert(candidate);
    }
    audience
  }
}

impl<'a> IntoIterator for &'a RecipientAudience {
  type Item = &'a Recipient;
  type IntoIter = std::slice::Iter<'a, Recipient>;

  fn into_iter(self) -> Self::IntoIter { self.recipients.iter() }
}
