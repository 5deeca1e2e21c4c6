//! `gatehouse-auth` — account-status gate for an authentication pipeline.
//!
//! Rejects attempts for accounts whose credentials are fine but whose status
//! is not (disabled, locked, expired...). The check runs once before
//! credentials are compared and once after they were accepted; see [`hook`].
//!
//! Transport, storage and credential matching stay outside this crate.

pub mod badge;
pub mod checker;
pub mod config;
pub mod error;
pub mod events;
pub mod hook;
pub mod passport;
pub mod pipeline;
pub mod token;
pub mod user;

#[cfg(test)]
mod testing;

pub use badge::{BadgeKind, BadgeSet};
pub use checker::{AccountStateChecker, Clock, UserStatusChecker};
pub use config::PipelineConfig;
pub use error::{AccountStatusError, AuthenticationError, PassportError};
pub use events::{AuthenticatorRef, CheckPassportEvent, LoginSuccessEvent, RequestContext};
pub use hook::UserStatusHook;
pub use passport::Passport;
pub use pipeline::{AuthenticationPipeline, Authenticator};
pub use token::AuthToken;
pub use user::{AccountState, Role, User};

pub use gatehouse_core::{AttemptId, UserId};
