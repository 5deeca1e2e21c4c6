//! Per-attempt authentication state.

use crate::badge::{BadgeKind, BadgeSet};
use crate::error::PassportError;
use crate::user::User;

/// What an authenticator knows about one login attempt.
///
/// Built by the authenticator at the start of the attempt and dropped when it
/// concludes. The user may be absent (identity-less flows, or resolution that
/// has not happened yet); once present it cannot be replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passport {
    user: Option<User>,
    badges: BadgeSet,
}

impl Passport {
    /// Passport for an already-resolved user.
    pub fn new(user: User) -> Self {
        Self {
            user: Some(user),
            badges: BadgeSet::new(),
        }
    }

    /// Passport whose user is not known (yet).
    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn with_badge(mut self, kind: BadgeKind) -> Self {
        self.badges.insert(kind);
        self
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Resolve the user of a pending passport.
    pub fn resolve_user(&mut self, user: User) -> Result<(), PassportError> {
        if let Some(existing) = &self.user {
            return Err(PassportError::UserAlreadyResolved(existing.identifier.clone()));
        }
        self.user = Some(user);
        Ok(())
    }

    pub fn has_badge(&self, kind: BadgeKind) -> bool {
        self.badges.contains(kind)
    }

    /// Returns `false` if the badge was already attached.
    pub fn add_badge(&mut self, kind: BadgeKind) -> bool {
        self.badges.insert(kind)
    }

    pub fn badges(&self) -> &BadgeSet {
        &self.badges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_passport_has_no_user_and_no_badges() {
        let passport = Passport::unresolved();
        assert!(passport.user().is_none());
        assert!(passport.badges().is_empty());
    }

    #[test]
    fn resolving_twice_is_rejected_and_keeps_first_user() {
        let mut passport = Passport::unresolved();
        passport.resolve_user(User::new("first")).unwrap();

        let err = passport.resolve_user(User::new("second")).unwrap_err();
        assert_eq!(err, PassportError::UserAlreadyResolved("first".to_string()));
        assert_eq!(passport.user().map(User::identifier), Some("first"));
    }

    #[test]
    fn badges_attach_once() {
        let mut passport = Passport::new(User::new("test")).with_badge(BadgeKind::PreAuthenticated);
        assert!(passport.has_badge(BadgeKind::PreAuthenticated));
        assert!(!passport.add_badge(BadgeKind::PreAuthenticated));
        assert!(passport.add_badge(BadgeKind::RememberMe));
        assert_eq!(passport.badges().len(), 2);
    }
}
