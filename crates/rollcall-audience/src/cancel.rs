//! Cooperative cancellation.

use std::sync::{
  Arc,
  atomic::{AtomicBool, Ordering},
};

use crate::{Error, Result};

/// A cheap-to-clone cancellation handle.
///
/// The engine checks the token between store fetches and between group
/// expansions. Once cancelled, the in-flight resolution returns
/// [`Error::Cancelled`]; a partial audience is never returned. The default
/// token is never cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
  cancelled: Arc<AtomicBool>,
}

impl CancelToken {
  pub fn new() -> Self { Self::default() }

  /// Signal cancellation. Idempotent; there is no un-cancel.
  pub fn cancel(&self) { self.cancelled.store(true, Ordering::Relaxed); }

  pub fn is_cancelled(&self) -> bool { self.cancelled.load(Ordering::Relaxed) }

  pub(crate) fn check(&self) -> Result<()> {
    if self.is_cancelled() {
      Err(Error::Cancelled)
    } else {
      Ok(())
    }
  }
}
