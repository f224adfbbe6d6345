use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::AppSettings;
use crate::errors::{InternalError, ProfileError};
use crate::services::LockoutService;
use crate::stores::ProfileStore;
use crate::types::db::profile;
use crate::types::internal::auth::Claims;
use crate::types::internal::lockout::LockoutStatus;

/// Login flow errors, separated from `InternalError` because the lockout
/// variants carry derived state the API must surface (remaining seconds).
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Account temporarily locked, retry in {} seconds", .status.remaining_seconds)]
    Locked { status: LockoutStatus },

    #[error("Invalid credentials")]
    InvalidCredentials { status: LockoutStatus },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Successful login result
pub struct LoginOutcome {
    pub access_token: String,
    pub expires_in: i64,
    pub profile: profile::Model,
}

/// Authentication service orchestrating registration, the guarded login flow,
/// and JWT issue/validation.
///
/// Login order matters: lockout is checked before credentials, every attempt
/// (success or failure) is appended to the attempt log, and lockout state is
/// recomputed immediately after logging so a fifth failure locks the account
/// in the same response.
pub struct AuthService {
    profile_store: Arc<ProfileStore>,
    lockout: Arc<LockoutService>,
    jwt_secret: String,
    access_token_ttl_secs: i64,
}

impl AuthService {
    pub fn new(
        profile_store: Arc<ProfileStore>,
        lockout: Arc<LockoutService>,
        settings: &AppSettings,
    ) -> Self {
        Self {
            profile_store,
            lockout,
            jwt_secret: settings.jwt_secret.clone(),
            access_token_ttl_secs: settings.access_token_ttl.as_secs() as i64,
        }
    }

    /// Register a new account. Duplicate email surfaces as
    /// `ProfileError::DuplicateEmail`.
    pub async fn register(
        &self,
        email: String,
        password: &str,
        full_name: Option<String>,
        phone: Option<String>,
    ) -> Result<profile::Model, InternalError> {
        self.profile_store
            .create_profile(email, password, full_name, phone)
            .await
    }

    /// Authenticate an email/password pair behind the lockout guard.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        user_agent: Option<String>,
    ) -> Result<LoginOutcome, LoginError> {
        let status = self.lockout.status(email).await?;
        if status.locked {
            return Err(LoginError::Locked { status });
        }

        match self.profile_store.verify_credentials(email, password).await {
            Ok(user) => {
                self.lockout
                    .record_attempt(email, true, None, Some(user.id.clone()), user_agent)
                    .await?;

                let (access_token, expires_in) = self.generate_jwt(&user)?;
                Ok(LoginOutcome {
                    access_token,
                    expires_in,
                    profile: user,
                })
            }
            Err(InternalError::Profile(ProfileError::InvalidCredentials)) => {
                let status = self
                    .lockout
                    .record_attempt(
                        email,
                        false,
                        Some("invalid_credentials".to_string()),
                        None,
                        user_agent,
                    )
                    .await?;

                if status.locked {
                    Err(LoginError::Locked { status })
                } else {
                    Err(LoginError::InvalidCredentials { status })
                }
            }
            Err(err) => Err(LoginError::Internal(err)),
        }
    }

    /// Issue a signed access token for a profile.
    pub fn generate_jwt(&self, user: &profile::Model) -> Result<(String, i64), InternalError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            exp: now + self.access_token_ttl_secs,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::crypto("generate_jwt", e.to_string()))?;

        Ok((token, self.access_token_ttl_secs))
    }

    /// Validate a bearer token and return its claims. Expired or tampered
    /// tokens return None; the API layer turns that into 401.
    pub fn validate_token(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .ok()
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod auth_service_tests;
