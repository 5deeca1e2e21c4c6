//! Token issued once credentials are accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gatehouse_core::UserId;

use crate::badge::BadgeKind;
use crate::error::AuthenticationError;
use crate::passport::Passport;
use crate::user::Role;

/// Authenticated identity handed back to the caller.
///
/// Provisional until the post-credentials checkpoint passes; the pipeline
/// drops it if that checkpoint fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub user_id: UserId,
    pub user_identifier: String,
    pub roles: Vec<Role>,
    /// Firewall (authentication context) the token was issued for.
    pub firewall: String,
    pub remember_me: bool,
    pub issued_at: DateTime<Utc>,
}

impl AuthToken {
    /// Build a token for the passport's user.
    pub fn for_passport(
        passport: &Passport,
        firewall: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, AuthenticationError> {
        let user = passport.user().ok_or(AuthenticationError::MissingUser)?;
        Ok(Self {
            user_id: user.id,
            user_identifier: user.identifier.clone(),
            roles: user.roles.clone(),
            firewall: firewall.to_string(),
            remember_me: passport.has_badge(BadgeKind::RememberMe),
            issued_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use gatehouse_core::UserId;

    #[test]
    fn token_copies_identity_and_remember_me_badge() {
        let id = UserId::new();
        let user = User::new("test").with_id(id).with_role(Role::new("member"));
        let passport = Passport::new(user.clone()).with_badge(BadgeKind::RememberMe);
        let now = Utc::now();

        let token = AuthToken::for_passport(&passport, "main", now).unwrap();
        assert_eq!(token.user_id, id);
        assert_eq!(token.user_identifier, "test");
        assert_eq!(token.roles, vec![Role::new("member")]);
        assert_eq!(token.firewall, "main");
        assert!(token.remember_me);
        assert_eq!(token.issued_at, now);
    }

    #[test]
    fn token_requires_a_user() {
        let err = AuthToken::for_passport(&Passport::unresolved(), "main", Utc::now()).unwrap_err();
        assert_eq!(err, AuthenticationError::MissingUser);
    }

    #[test]
    fn token_serializes_roles_as_plain_strings() {
        let passport = Passport::new(User::new("test").with_role(Role::new("admin")));
        let token = AuthToken::for_passport(&passport, "api", Utc::now()).unwrap();

        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["roles"], serde_json::json!(["admin"]));
        assert_eq!(json["firewall"], "api");
        assert_eq!(json["remember_me"], false);

        let back: AuthToken = serde_json::from_value(json).unwrap();
        assert_eq!(back, token);
    }
}
