// API layer - HTTP endpoints

pub mod admin;
pub mod auth;
pub mod cars;
pub mod customer;
pub mod health;

pub use admin::AdminApi;
pub use auth::{AuthApi, BearerAuth};
pub use cars::CarsApi;
pub use customer::CustomerApi;
pub use health::HealthApi;

use poem::Request;

use crate::app_data::AppData;
use crate::types::internal::context::RequestContext;

/// Why a guarded request was turned away before reaching its handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthRejection {
    /// Token missing, expired, or tampered
    Unauthorized,
    /// Token valid but the caller lacks the admin role
    Forbidden,
}

/// Validate a bearer token and build the request context.
pub(crate) fn authenticate(
    app_data: &AppData,
    token: &str,
    user_agent: Option<String>,
) -> Result<RequestContext, AuthRejection> {
    let claims = app_data
        .auth_service
        .validate_token(token)
        .ok_or(AuthRejection::Unauthorized)?;
    Ok(RequestContext::from_claims(&claims, user_agent))
}

/// Admin gate for the console endpoints.
///
/// Roles are resolved fresh from the store on every call rather than trusted
/// from the token, so a revoked admin is cut off immediately. A role lookup
/// failure fails closed.
pub(crate) async fn authorize_admin(
    app_data: &AppData,
    token: &str,
    user_agent: Option<String>,
) -> Result<RequestContext, AuthRejection> {
    let ctx = authenticate(app_data, token, user_agent)?;

    match app_data.role_service.is_admin(&ctx.actor_id).await {
        Ok(true) => Ok(ctx),
        Ok(false) => Err(AuthRejection::Forbidden),
        Err(err) => {
            tracing::error!(
                "Role resolution failed for {} during admin check: {:?}",
                ctx.actor_id,
                err
            );
            Err(AuthRejection::Forbidden)
        }
    }
}

/// User-Agent header, recorded with login attempts for the audit trail.
pub(crate) fn user_agent(req: &Request) -> Option<String> {
    req.header("User-Agent").map(|v| v.to_string())
}

/// Bearer credential from the Authorization header, for endpoints where a
/// token is optional and its absence is not an error.
pub(crate) fn bearer_token(req: &Request) -> Option<&str> {
    req.header("Authorization")
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
