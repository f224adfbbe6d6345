use std::env;
use std::time::Duration;

/// Server and auth configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub database_url: String,
    pub bind_address: String,
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
}

impl AppSettings {
    /// Load settings from environment variables.
    ///
    /// `JWT_SECRET` is the only hard requirement; everything else has a
    /// development-friendly default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://showroom.db?mode=rwc".to_string());

        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| SettingsError::MissingJwtSecret)?;
        if jwt_secret.len() < 32 {
            return Err(SettingsError::WeakJwtSecret);
        }

        let access_token_ttl = env::var("ACCESS_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(3600));

        Ok(Self {
            database_url,
            bind_address,
            jwt_secret,
            access_token_ttl,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("JWT_SECRET environment variable must be set")]
    MissingJwtSecret,

    #[error("JWT_SECRET must be at least 32 characters")]
    WeakJwtSecret,
}

/// Brute-force lockout policy.
///
/// A rolling window of failed attempts; once the failure count inside the
/// window reaches the threshold the email is locked for the cooldown,
/// measured from the most recent failure.
#[derive(Debug, Clone, Copy)]
pub struct LockoutPolicy {
    pub max_failures: u64,
    pub window: Duration,
    pub cooldown: Duration,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_failures: 5,
            window: Duration::from_secs(15 * 60),
            cooldown: Duration::from_secs(30 * 60),
        }
    }
}

impl LockoutPolicy {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_failures = env::var("LOCKOUT_MAX_FAILURES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_failures);

        let window = env::var("LOCKOUT_WINDOW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.window);

        let cooldown = env::var("LOCKOUT_COOLDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.cooldown);

        Self {
            max_failures,
            window,
            cooldown,
        }
    }
}

/// Outbound transactional-email configuration.
///
/// With no API key set, sending is disabled and the notification service
/// becomes a no-op; local runs and tests need no network.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub from_address: String,
    pub operator_address: Option<String>,
}

impl NotificationConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("EMAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
            api_key: env::var("EMAIL_API_KEY").ok(),
            from_address: env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "bookings@showroom.example".to_string()),
            operator_address: env::var("EMAIL_OPERATOR_COPY").ok(),
        }
    }
}
