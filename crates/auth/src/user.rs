//! Identity resolved for an authentication attempt.
//!
//! A [`User`] is produced by whatever resolves credentials to an account
//! (database lookup, directory query, upstream token). This crate only reads it.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatehouse_core::UserId;

// ─────────────────────────────────────────────────────────────────────────────
// Role
// ─────────────────────────────────────────────────────────────────────────────

/// Role name copied onto the issued token.
///
/// Opaque here; deciding what a role allows is an authorization concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Account state
// ─────────────────────────────────────────────────────────────────────────────

/// Operational flags of an account, as loaded alongside the identity.
///
/// Only [`crate::AccountStateChecker`] interprets these; custom checkers are
/// free to ignore them and consult their own storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    pub enabled: bool,
    pub locked: bool,
    /// Whether the account finished its verification step (e.g. email).
    pub verified: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub credentials_expire_at: Option<DateTime<Utc>>,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            enabled: true,
            locked: false,
            verified: true,
            expires_at: None,
            credentials_expire_at: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Login identifier (username, email...). Stable for the account.
    pub identifier: String,
    pub roles: Vec<Role>,
    pub account: AccountState,
}

impl User {
    /// An active account with no roles.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            identifier: identifier.into(),
            roles: Vec::new(),
            account: AccountState::default(),
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    pub fn with_account(mut self, account: AccountState) -> Self {
        self.account = account;
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}
