//! Error types for `rollcall-audience`.
//!
//! Every variant is terminal for the `resolve` call that produced it — the
//! engine never retries and never returns a partial audience alongside an
//! error. Rendering user-facing text is the caller's responsibility.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("category not found: {0}")]
  CategoryNotFound(Uuid),

  #[error("activity group not found: {0}")]
  GroupNotFound(Uuid),

  #[error("no participation record for event {event_id}, group {group_id}")]
  EventNotFound { event_id: Uuid, group_id: Uuid },

  /// A backend failure, with the underlying message preserved for
  /// diagnostics.
  #[error("directory error: {0}")]
  Directory(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("audience resolution cancelled")]
  Cancelled,
}

impl Error {
  pub(crate) fn directory<E>(source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Directory(Box::new(source))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
