use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
///
/// Roles are deliberately absent: they are resolved fresh from the store on
/// every guarded request, so a revoked admin loses access without waiting for
/// token expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID string)
    pub sub: String,
    /// Email at issue time
    pub email: String,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token identifier
    pub jti: String,
}
