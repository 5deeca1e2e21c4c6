//! Authentication failure taxonomy.

use thiserror::Error;

/// An account is structurally valid but operationally unusable.
///
/// Raised by a [`crate::UserStatusChecker`] and passed through the hook
/// untouched. Status violations are never transient; an attempt that hits one
/// is over.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountStatusError {
    #[error("account is locked")]
    Locked,

    #[error("account is disabled")]
    Disabled,

    #[error("account has expired")]
    Expired,

    #[error("account is not verified")]
    Unverified,

    #[error("credentials have expired")]
    CredentialsExpired,

    /// Application-specific rule with its own reason.
    #[error("account status rejected: {0}")]
    Custom(String),
}

impl AccountStatusError {
    pub fn custom(reason: impl Into<String>) -> Self {
        Self::Custom(reason.into())
    }
}

/// Why an authentication attempt failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("invalid credentials")]
    BadCredentials,

    #[error("user not found")]
    UserNotFound,

    /// The passport never resolved a user but the step needed one.
    #[error("no user resolved for this attempt")]
    MissingUser,

    #[error(transparent)]
    AccountStatus(#[from] AccountStatusError),

    /// Authenticator-specific failure (malformed request, upstream error...).
    #[error("authenticator failure: {0}")]
    Authenticator(String),
}

impl AuthenticationError {
    pub fn authenticator(msg: impl Into<String>) -> Self {
        Self::Authenticator(msg.into())
    }

    pub fn is_account_status(&self) -> bool {
        matches!(self, Self::AccountStatus(_))
    }

    /// Failures that reveal something about the account rather than the
    /// submitted secret: unknown account or a status violation.
    pub fn discloses_account(&self) -> bool {
        matches!(self, Self::UserNotFound | Self::AccountStatus(_))
    }

    /// Message safe to show to the party attempting to log in.
    ///
    /// Identical for every variant: the caller must not learn whether the
    /// password was wrong, the account is disabled, or which checkpoint fired.
    pub fn public_message(&self) -> &'static str {
        "Authentication failed."
    }
}

/// Misuse of a [`crate::Passport`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PassportError {
    #[error("passport already resolved user '{0}'")]
    UserAlreadyResolved(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_convert_into_authentication_errors() {
        let err: AuthenticationError = AccountStatusError::Locked.into();
        assert!(err.is_account_status());
        assert_eq!(err.to_string(), "account is locked");
    }

    #[test]
    fn only_account_level_failures_disclose_the_account() {
        assert!(AuthenticationError::UserNotFound.discloses_account());
        assert!(AuthenticationError::from(AccountStatusError::Expired).discloses_account());
        assert!(!AuthenticationError::BadCredentials.discloses_account());
        assert!(!AuthenticationError::authenticator("malformed form").discloses_account());
    }

    #[test]
    fn public_message_does_not_reveal_the_cause() {
        let bad_password = AuthenticationError::BadCredentials;
        let disabled = AuthenticationError::from(AccountStatusError::Disabled);
        assert_eq!(bad_password.public_message(), disabled.public_message());
        assert!(!disabled.public_message().contains("disabled"));
    }
}
