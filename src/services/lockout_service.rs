use std::sync::Arc;

use chrono::Utc;

use crate::config::LockoutPolicy;
use crate::errors::InternalError;
use crate::stores::LoginAttemptStore;
use crate::types::db::login_attempt;
use crate::types::internal::lockout::LockoutStatus;

/// Brute-force lockout guard.
///
/// Lockout is a derived, point-in-time computation over the append-only
/// login-attempt log: locked when the window ending at the most recent
/// failure holds at least the threshold of failures, until that failure's
/// cooldown elapses. Nothing is stored, so there is no locked flag to drift
/// out of sync with the history it summarizes.
pub struct LockoutService {
    attempts: Arc<LoginAttemptStore>,
    policy: LockoutPolicy,
}

impl LockoutService {
    pub fn new(attempts: Arc<LoginAttemptStore>, policy: LockoutPolicy) -> Self {
        Self { attempts, policy }
    }

    pub fn policy(&self) -> LockoutPolicy {
        self.policy
    }

    /// Compute the current lockout state for an email address.
    ///
    /// The threshold is judged over the window ending at the most recent
    /// failure, not the window ending now, so a lock holds for the full
    /// cooldown even after the failures have aged past the window itself.
    pub async fn status(&self, email: &str) -> Result<LockoutStatus, InternalError> {
        let now = Utc::now().timestamp();
        let window = self.policy.window.as_secs() as i64;
        let cooldown = self.policy.cooldown.as_secs() as i64;

        let failed_in_window = self
            .attempts
            .count_failures_since(email, now - window)
            .await?;

        // A failure whose cooldown may still be running can lie beyond the
        // window, so search over whichever span is wider.
        let last_failure = self
            .attempts
            .latest_failure_since(email, now - window.max(cooldown))
            .await?;

        let Some(last) = last_failure else {
            return Ok(LockoutStatus {
                locked: false,
                remaining_seconds: 0,
                failed_in_window,
            });
        };

        let failures_at_last = self
            .attempts
            .count_failures_between(email, last - window, last)
            .await?;

        if failures_at_last < self.policy.max_failures {
            return Ok(LockoutStatus {
                locked: false,
                remaining_seconds: 0,
                failed_in_window,
            });
        }

        let remaining = (last + cooldown - now).max(0) as u64;

        Ok(LockoutStatus {
            locked: remaining > 0,
            remaining_seconds: remaining,
            failed_in_window,
        })
    }

    pub async fn is_locked(&self, email: &str) -> Result<bool, InternalError> {
        Ok(self.status(email).await?.locked)
    }

    pub async fn remaining_seconds(&self, email: &str) -> Result<u64, InternalError> {
        Ok(self.status(email).await?.remaining_seconds)
    }

    /// Append an attempt record and return the freshly recomputed state.
    ///
    /// Called on every authentication attempt, success or failure: a failure
    /// changes future lockout windows, and a success belongs in the audit
    /// history even when the user turns out to lack admin rights.
    pub async fn record_attempt(
        &self,
        email: &str,
        success: bool,
        failure_reason: Option<String>,
        user_id: Option<String>,
        user_agent: Option<String>,
    ) -> Result<LockoutStatus, InternalError> {
        self.attempts
            .record(email, success, failure_reason, user_id, user_agent)
            .await?;

        self.status(email).await
    }

    /// Newest-first attempt history for the login surface.
    pub async fn recent_attempts(
        &self,
        email: &str,
        limit: u64,
    ) -> Result<Vec<login_attempt::Model>, InternalError> {
        self.attempts.recent_attempts(email, limit).await
    }
}

#[cfg(test)]
#[path = "lockout_service_tests.rs"]
mod lockout_service_tests;
