//! Account-status policy consulted around credential verification.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::AccountStatusError;
use crate::user::User;

/// Decides whether an account may log in, independently of its credentials.
///
/// Implementations may block (storage lookups) and may have side effects.
/// `check_pre_auth` runs before credentials are compared, `check_post_auth`
/// after they were accepted.
pub trait UserStatusChecker: Send + Sync {
    fn check_pre_auth(&self, user: &User) -> Result<(), AccountStatusError>;

    fn check_post_auth(&self, user: &User) -> Result<(), AccountStatusError>;
}

impl<T: UserStatusChecker + ?Sized> UserStatusChecker for &T {
    fn check_pre_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        (**self).check_pre_auth(user)
    }

    fn check_post_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        (**self).check_post_auth(user)
    }
}

impl<T: UserStatusChecker + ?Sized> UserStatusChecker for Arc<T> {
    fn check_pre_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        (**self).check_pre_auth(user)
    }

    fn check_post_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        (**self).check_post_auth(user)
    }
}

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Checker driven by the [`crate::AccountState`] loaded with the user.
///
/// Pre-auth rejects locked, disabled, expired and unverified accounts (first
/// match wins, in that order). Post-auth rejects expired credentials.
#[derive(Clone)]
pub struct AccountStateChecker {
    clock: Clock,
}

impl AccountStateChecker {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(Utc::now),
        }
    }

    pub fn with_clock(clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    fn has_passed(&self, instant: Option<DateTime<Utc>>) -> bool {
        instant.is_some_and(|at| at <= (self.clock)())
    }
}

impl Default for AccountStateChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for AccountStateChecker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccountStateChecker").finish_non_exhaustive()
    }
}

impl UserStatusChecker for AccountStateChecker {
    fn check_pre_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        let account = &user.account;
        if account.locked {
            return Err(AccountStatusError::Locked);
        }
        if !account.enabled {
            return Err(AccountStatusError::Disabled);
        }
        if self.has_passed(account.expires_at) {
            return Err(AccountStatusError::Expired);
        }
        if !account.verified {
            return Err(AccountStatusError::Unverified);
        }
        Ok(())
    }

    fn check_post_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        if self.has_passed(user.account.credentials_expire_at) {
            return Err(AccountStatusError::CredentialsExpired);
        }
        Ok(())
    }
}
