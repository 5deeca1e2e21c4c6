//! Lifecycle events raised by the pipeline around credential verification.
//!
//! Events borrow the pipeline-owned passport and token; handlers only read them.

use std::borrow::Cow;
use std::net::IpAddr;

use gatehouse_core::AttemptId;

use crate::passport::Passport;
use crate::token::AuthToken;

/// Name of the authenticator handling an attempt. Used for attribution only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthenticatorRef(Cow<'static, str>);

impl AuthenticatorRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AuthenticatorRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transport-level facts about the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    pub attempt_id: AttemptId,
    pub client_ip: Option<IpAddr>,
    pub user_agent: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Raised once per attempt, before any credential comparison.
#[derive(Debug, Clone, Copy)]
pub struct CheckPassportEvent<'a> {
    pub authenticator: &'a AuthenticatorRef,
    pub passport: &'a Passport,
}

impl<'a> CheckPassportEvent<'a> {
    pub fn new(authenticator: &'a AuthenticatorRef, passport: &'a Passport) -> Self {
        Self {
            authenticator,
            passport,
        }
    }
}

/// Raised once per attempt, only after credentials were accepted and a token
/// was issued.
#[derive(Debug, Clone, Copy)]
pub struct LoginSuccessEvent<'a> {
    pub authenticator: &'a AuthenticatorRef,
    pub passport: &'a Passport,
    pub token: &'a AuthToken,
    pub request: &'a RequestContext,
    pub firewall: &'a str,
}
