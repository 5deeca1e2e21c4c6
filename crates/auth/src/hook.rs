//! User-status hook invoked at the two verification checkpoints.
//!
//! The pipeline calls [`UserStatusHook::pre_credentials_verification`] before
//! comparing credentials and [`UserStatusHook::post_credentials_verification`]
//! after they were accepted. Both are no-ops when the passport carries no user.
//!
//! The [`BadgeKind::PreAuthenticated`] opt-out only applies to the first
//! checkpoint. The post-credentials check always runs for a resolved user,
//! whatever badges the authenticator attached.

use tracing::{debug, warn};

use crate::badge::BadgeKind;
use crate::checker::UserStatusChecker;
use crate::error::AccountStatusError;
use crate::events::{CheckPassportEvent, LoginSuccessEvent};

/// Gate that consults a [`UserStatusChecker`] around credential verification.
///
/// Holds no mutable state; one hook can serve any number of concurrent attempts.
#[derive(Debug, Clone)]
pub struct UserStatusHook<C> {
    checker: C,
}

impl<C: UserStatusChecker> UserStatusHook<C> {
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    /// Checkpoint before credentials are compared.
    ///
    /// A checker error is returned unchanged and must abort the attempt.
    pub fn pre_credentials_verification(
        &self,
        event: &CheckPassportEvent<'_>,
    ) -> Result<(), AccountStatusError> {
        let Some(user) = event.passport.user() else {
            debug!(authenticator = %event.authenticator, "pre-auth status check skipped: no user");
            return Ok(());
        };

        if event.passport.has_badge(BadgeKind::PreAuthenticated) {
            debug!(
                authenticator = %event.authenticator,
                user = %user.identifier,
                "pre-auth status check skipped: pre-authenticated"
            );
            return Ok(());
        }

        self.checker.check_pre_auth(user).inspect_err(|err| {
            warn!(
                authenticator = %event.authenticator,
                user = %user.identifier,
                error = %err,
                "pre-auth status check rejected account"
            );
        })
    }

    /// Checkpoint after credentials were accepted and a token issued.
    pub fn post_credentials_verification(
        &self,
        event: &LoginSuccessEvent<'_>,
    ) -> Result<(), AccountStatusError> {
        let Some(user) = event.passport.user() else {
            debug!(
                authenticator = %event.authenticator,
                attempt_id = %event.request.attempt_id,
                "post-auth status check skipped: no user"
            );
            return Ok(());
        };

        self.checker.check_post_auth(user).inspect_err(|err| {
            warn!(
                authenticator = %event.authenticator,
                attempt_id = %event.request.attempt_id,
                firewall = event.firewall,
                user = %user.identifier,
                error = %err,
                "post-auth status check rejected account"
            );
        })
    }
}
