//! Attempt modifiers attached to a passport.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Kind of marker an authenticator can attach to an attempt.
///
/// Badges are identified by kind only; a passport holds each kind at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    /// The authenticator already validated the account status upstream
    /// (e.g. a session established by a trusted SSO proxy). Skips the
    /// pre-credentials status check only.
    PreAuthenticated,

    /// The issued token should be marked as long-lived ("remember me").
    RememberMe,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::PreAuthenticated => "pre_authenticated",
            BadgeKind::RememberMe => "remember_me",
        }
    }
}

impl core::fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of badge kinds with O(1) membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeSet {
    kinds: HashSet<BadgeKind>,
}

impl BadgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a badge. Returns `false` if that kind was already present.
    pub fn insert(&mut self, kind: BadgeKind) -> bool {
        self.kinds.insert(kind)
    }

    pub fn contains(&self, kind: BadgeKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = BadgeKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl FromIterator<BadgeKind> for BadgeSet {
    fn from_iter<I: IntoIterator<Item = BadgeKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}
