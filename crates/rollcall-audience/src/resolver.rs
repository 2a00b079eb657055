//! [`AudienceResolver`] — the resolution facade.

use std::collections::HashSet;

use tracing::debug;
use uuid::Uuid;

use rollcall_core::{
  AudienceRequest, RecipientAudience, group::ActivityGroup, store::DirectoryStore,
};

use crate::{
  CancelToken, Error, Result,
  collect::collect_groups,
  expand::{expand_group, expand_group_for_event, expand_groups},
};

/// Resolves [`AudienceRequest`]s against a directory backend.
///
/// Stateless apart from the backend handle and an optional cancellation
/// token; safe to share or rebuild per request.
pub struct AudienceResolver<D> {
  store:  D,
  cancel: CancelToken,
}

impl<D: DirectoryStore> AudienceResolver<D> {
  pub fn new(store: D) -> Self {
    Self { store, cancel: CancelToken::new() }
  }

  /// Attach a cancellation token. Cancelling it makes in-flight and future
  /// resolutions on this resolver return [`Error::Cancelled`].
  pub fn with_cancellation(mut self, cancel: CancelToken) -> Self {
    self.cancel = cancel;
    self
  }

  /// Resolve the deduplicated audience for `request`.
  ///
  /// Any failure aborts the whole resolution; a partial audience is never
  /// returned as a success.
  pub async fn resolve(&self, request: AudienceRequest) -> Result<RecipientAudience> {
    self.cancel.check()?;

    let audience: RecipientAudience = match request {
      AudienceRequest::Group { group_id } => {
        let group = self.fetch_group(group_id).await?;
        expand_group(&group).into_iter().collect()
      }

      AudienceRequest::CategorySubtree { category_id } => {
        let groups = collect_groups(&self.store, category_id, &self.cancel).await?;
        self.cancel.check()?;
        expand_groups(&groups).into_iter().collect()
      }

      AudienceRequest::EventParticipation { event_id, group_id } => {
        let occurrence = self
          .store
          .event_participation(event_id, group_id)
          .await
          .map_err(Error::directory)?
          .ok_or(Error::EventNotFound { event_id, group_id })?;
        self.cancel.check()?;
        let group = self.fetch_group(group_id).await?;
        let participants: HashSet<Uuid> = occurrence.participants.into_iter().collect();
        expand_group_for_event(&group, &participants).into_iter().collect()
      }
    };

    debug!(?request, recipients = audience.len(), "audience resolved");
    Ok(audience)
  }

  async fn fetch_group(&self, group_id: Uuid) -> Result<ActivityGroup> {
    self
      .store
      .group_with_relations(group_id)
      .await
      .map_err(Error::directory)?
      .ok_or(Error::GroupNotFound(group_id))
  }
}
