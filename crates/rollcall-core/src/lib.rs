//! Core types and trait definitions for the Rollcall audience engine.
//!
//! This crate is deliberately free of engine logic and backend dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod category;
pub mod event;
pub mod group;
pub mod person;
pub mod recipient;
pub mod request;
pub mod store;

pub use recipient::{Recipient, RecipientAudience};
pub use request::AudienceRequest;
