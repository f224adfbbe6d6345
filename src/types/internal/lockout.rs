/// Point-in-time lockout state for one email address.
///
/// Never persisted: always recomputed from the login-attempt history, so it
/// cannot drift from the log it is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutStatus {
    pub locked: bool,
    pub remaining_seconds: u64,
    /// Failed attempts inside the current window, for operator display
    pub failed_in_window: u64,
}

impl LockoutStatus {
    pub fn unlocked() -> Self {
        Self {
            locked: false,
            remaining_seconds: 0,
            failed_in_window: 0,
        }
    }
}
