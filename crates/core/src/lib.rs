//! `gatehouse-core` — identifier and error primitives shared by the gatehouse crates.
//!
//! Nothing in here knows about authentication flow; it only names things.

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::{AttemptId, UserId};
