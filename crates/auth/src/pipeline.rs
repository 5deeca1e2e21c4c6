//! Drives one authentication attempt through both status checkpoints.
//!
//! Order per attempt:
//!
//! 1. authenticator builds the [`Passport`]
//! 2. pre-credentials checkpoint
//! 3. credential verification
//! 4. token issued
//! 5. post-credentials checkpoint
//!
//! A failure at any step ends the attempt; later steps never run.

use chrono::Utc;
use tracing::{debug, info, info_span};

use crate::checker::UserStatusChecker;
use crate::config::PipelineConfig;
use crate::error::AuthenticationError;
use crate::events::{AuthenticatorRef, CheckPassportEvent, LoginSuccessEvent, RequestContext};
use crate::hook::UserStatusHook;
use crate::passport::Passport;
use crate::token::AuthToken;

/// A way of turning submitted credentials into an authenticated identity.
///
/// Credential matching (password hashing, signature checks...) lives entirely
/// in the implementation.
pub trait Authenticator {
    /// What the client submitted (username/password pair, bearer token...).
    type Credentials: ?Sized;

    fn name(&self) -> AuthenticatorRef;

    /// Resolve the passport for this attempt. Must not compare credentials.
    fn authenticate(
        &self,
        credentials: &Self::Credentials,
        request: &RequestContext,
    ) -> Result<Passport, AuthenticationError>;

    fn verify_credentials(
        &self,
        credentials: &Self::Credentials,
        passport: &Passport,
    ) -> Result<(), AuthenticationError>;

    /// Issue the token for an accepted passport. Identity-less authenticators
    /// override this; the default requires a resolved user.
    fn create_token(
        &self,
        passport: &Passport,
        firewall: &str,
    ) -> Result<AuthToken, AuthenticationError> {
        AuthToken::for_passport(passport, firewall, Utc::now())
    }
}

pub struct AuthenticationPipeline<C> {
    hook: UserStatusHook<C>,
    config: PipelineConfig,
}

impl<C: UserStatusChecker> AuthenticationPipeline<C> {
    pub fn new(checker: C, config: PipelineConfig) -> Self {
        Self {
            hook: UserStatusHook::new(checker),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run one attempt. On success the returned token has passed both
    /// checkpoints.
    ///
    /// With `hide_account_status` set, unknown accounts and account-status
    /// failures come back as [`AuthenticationError::BadCredentials`].
    pub fn authenticate<A: Authenticator + ?Sized>(
        &self,
        authenticator: &A,
        credentials: &A::Credentials,
        request: &RequestContext,
    ) -> Result<AuthToken, AuthenticationError> {
        let authenticator_ref = authenticator.name();
        let span = info_span!(
            "authenticate",
            authenticator = %authenticator_ref,
            attempt_id = %request.attempt_id,
            client_ip = ?request.client_ip,
            firewall = %self.config.firewall
        );
        let _entered = span.enter();

        match self.run(authenticator, &authenticator_ref, credentials, request) {
            Ok(token) => {
                info!(user = %token.user_identifier, "authentication succeeded");
                Ok(token)
            }
            Err(err) => {
                info!(error = %err, "authentication failed");
                Err(self.conceal(err))
            }
        }
    }

    fn run<A: Authenticator + ?Sized>(
        &self,
        authenticator: &A,
        authenticator_ref: &AuthenticatorRef,
        credentials: &A::Credentials,
        request: &RequestContext,
    ) -> Result<AuthToken, AuthenticationError> {
        let passport = authenticator.authenticate(credentials, request)?;
        debug!(
            user = passport.user().map(|u| u.identifier.as_str()),
            badges = ?passport.badges().iter().collect::<Vec<_>>(),
            "passport built"
        );

        self.hook
            .pre_credentials_verification(&CheckPassportEvent::new(authenticator_ref, &passport))?;

        authenticator.verify_credentials(credentials, &passport)?;
        debug!("credentials verified");

        let token = authenticator.create_token(&passport, &self.config.firewall)?;

        self.hook.post_credentials_verification(&LoginSuccessEvent {
            authenticator: authenticator_ref,
            passport: &passport,
            token: &token,
            request,
            firewall: &self.config.firewall,
        })?;

        Ok(token)
    }

    fn conceal(&self, err: AuthenticationError) -> AuthenticationError {
        if self.config.hide_account_status && err.discloses_account() {
            AuthenticationError::BadCredentials
        } else {
            err
        }
    }
}
