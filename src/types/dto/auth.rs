use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::profile;
use crate::types::dto::common::ErrorResponse;

/// Request model for account registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Email address, unique per account
    pub email: String,

    /// Password in plain text, hashed server-side
    pub password: String,

    /// Display name
    pub full_name: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,
}

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Public view of a profile, roles included
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ProfileView {
    /// User ID (UUID)
    pub id: String,

    /// Email address
    pub email: String,

    /// Display name
    pub full_name: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Avatar image URL
    pub avatar_url: Option<String>,

    /// Free-form bio text
    pub bio: Option<String>,

    /// Role names currently held; empty means plain user
    pub roles: Vec<String>,

    /// Creation time (Unix timestamp)
    pub created_at: i64,
}

impl ProfileView {
    /// Build a view from the entity plus the separately resolved role names.
    pub fn from_model(model: profile::Model, roles: Vec<String>) -> Self {
        Self {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            phone: model.phone,
            avatar_url: model.avatar_url,
            bio: model.bio,
            roles,
            created_at: model.created_at,
        }
    }
}

/// Response model containing the access token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Number of seconds until the access token expires
    pub expires_in: i64,

    /// The authenticated profile
    pub profile: ProfileView,
}

/// Current lockout state for an email address
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LockoutStatusResponse {
    /// Whether the address is currently locked out
    pub locked: bool,

    /// Seconds until the lock clears; 0 when unlocked
    pub remaining_seconds: u64,

    /// Failed attempts inside the current window
    pub failed_in_window: u64,
}

/// Error body for a locked-out login attempt
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LockedResponse {
    /// Human-readable error message
    pub error: String,

    /// Seconds until login becomes possible again
    pub retry_after_seconds: u64,
}

/// One entry in the login attempt history
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginAttemptView {
    /// Whether the attempt succeeded
    pub success: bool,

    /// Failure reason for failed attempts
    pub failure_reason: Option<String>,

    /// User-Agent header of the attempt, if sent
    pub user_agent: Option<String>,

    /// Attempt time (Unix timestamp)
    pub created_at: i64,
}

/// API response for the register endpoint
#[derive(ApiResponse)]
pub enum RegisterApiResponse {
    /// Account created
    #[oai(status = 200)]
    Ok(Json<ProfileView>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Email already registered
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Registration failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the login endpoint
#[derive(ApiResponse)]
pub enum LoginApiResponse {
    /// Authentication successful, token provided
    #[oai(status = 200)]
    Ok(Json<TokenResponse>),

    /// Invalid email or password
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Account temporarily locked out
    #[oai(status = 429)]
    Locked(Json<LockedResponse>),

    /// Login failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the lockout status endpoint
#[derive(ApiResponse)]
pub enum LockoutStatusApiResponse {
    /// Current lockout state
    #[oai(status = 200)]
    Ok(Json<LockoutStatusResponse>),

    /// Status lookup failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}
