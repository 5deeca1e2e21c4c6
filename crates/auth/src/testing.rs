//! Test doubles shared by the unit tests of this crate.

use std::sync::Mutex;

use crate::checker::UserStatusChecker;
use crate::error::AccountStatusError;
use crate::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Pre,
    Post,
}

/// Checker that records every call and fails on demand.
#[derive(Debug, Default)]
pub struct RecordingChecker {
    calls: Mutex<Vec<(Checkpoint, User)>>,
    pre_failure: Option<AccountStatusError>,
    post_failure: Option<AccountStatusError>,
}

impl RecordingChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_pre(err: AccountStatusError) -> Self {
        Self {
            pre_failure: Some(err),
            ..Self::default()
        }
    }

    pub fn failing_post(err: AccountStatusError) -> Self {
        Self {
            post_failure: Some(err),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(Checkpoint, User)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, checkpoint: Checkpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == checkpoint)
            .count()
    }

    fn record(&self, checkpoint: Checkpoint, user: &User) {
        self.calls.lock().unwrap().push((checkpoint, user.clone()));
    }
}

impl UserStatusChecker for RecordingChecker {
    fn check_pre_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        self.record(Checkpoint::Pre, user);
        self.pre_failure.clone().map_or(Ok(()), Err)
    }

    fn check_post_auth(&self, user: &User) -> Result<(), AccountStatusError> {
        self.record(Checkpoint::Post, user);
        self.post_failure.clone().map_or(Ok(()), Err)
    }
}
