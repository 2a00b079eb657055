//! Audience resolution for school notifications.
//!
//! Given a scope — one activity group, a category subtree, or one group's
//! participation in an event occurrence — this crate resolves the
//! deduplicated set of people (members, their guardians, supervising staff)
//! eligible to be notified, honoring per-person consent flags.
//!
//! The engine is read-only over domain state and backend-agnostic: it works
//! against any [`rollcall_core::store::DirectoryStore`]. Delivery (email,
//! push) and transport surfaces are the caller's concern.
//!
//! # Usage
//!
//! ```rust,ignore
//! let resolver = AudienceResolver::new(store);
//! let audience = resolver
//!   .resolve(AudienceRequest::CategorySubtree { category_id })
//!   .await?;
//! ```

pub mod cancel;
pub mod collect;
pub mod error;
pub mod expand;
pub mod resolver;

pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use resolver::AudienceResolver;
