use std::sync::Arc;

use poem::Request;
use poem_openapi::auth::Bearer;
use poem_openapi::param::Query;
use poem_openapi::{payload::Json, OpenApi, SecurityScheme, Tags};

use crate::api::user_agent;
use crate::app_data::AppData;
use crate::errors::{InternalError, ProfileError};
use crate::services::LoginError;
use crate::types::dto::auth::{
    LockedResponse, LockoutStatusApiResponse, LockoutStatusResponse, LoginApiResponse,
    LoginRequest, ProfileView, RegisterApiResponse, RegisterRequest, TokenResponse,
};
use crate::types::dto::common::ErrorResponse;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// Authentication API endpoints
pub struct AuthApi {
    app_data: Arc<AppData>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Register a new customer account
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterApiResponse {
        if !body.email.contains('@') {
            return RegisterApiResponse::BadRequest(Json(ErrorResponse::new(
                "A valid email address is required",
            )));
        }
        if body.password.len() < 8 {
            return RegisterApiResponse::BadRequest(Json(ErrorResponse::new(
                "Password must be at least 8 characters",
            )));
        }

        let request = body.0;
        match self
            .app_data
            .auth_service
            .register(
                request.email,
                &request.password,
                request.full_name,
                request.phone,
            )
            .await
        {
            Ok(profile) => {
                // New accounts always start with the empty role set
                RegisterApiResponse::Ok(Json(ProfileView::from_model(profile, Vec::new())))
            }
            Err(InternalError::Profile(ProfileError::DuplicateEmail(_))) => {
                RegisterApiResponse::Conflict(Json(ErrorResponse::new(
                    "Email is already registered",
                )))
            }
            Err(err) => {
                tracing::error!("Registration failed: {:?}", err);
                RegisterApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Registration failed",
                )))
            }
        }
    }

    /// Login with email and password to receive an access token
    ///
    /// Lockout is checked before credentials; a locked address is rejected
    /// without touching the password at all.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, req: &Request, body: Json<LoginRequest>) -> LoginApiResponse {
        let agent = user_agent(req);

        match self
            .app_data
            .auth_service
            .login(&body.email, &body.password, agent)
            .await
        {
            Ok(outcome) => {
                let roles = match self
                    .app_data
                    .role_service
                    .roles_for_user(&outcome.profile.id)
                    .await
                {
                    Ok(roles) => roles.names(),
                    Err(err) => {
                        tracing::error!("Role resolution failed after login: {:?}", err);
                        Vec::new()
                    }
                };

                LoginApiResponse::Ok(Json(TokenResponse {
                    access_token: outcome.access_token,
                    token_type: "Bearer".to_string(),
                    expires_in: outcome.expires_in,
                    profile: ProfileView::from_model(outcome.profile, roles),
                }))
            }
            Err(LoginError::Locked { status }) => LoginApiResponse::Locked(Json(LockedResponse {
                error: "Too many failed attempts, account temporarily locked".to_string(),
                retry_after_seconds: status.remaining_seconds,
            })),
            Err(LoginError::InvalidCredentials { .. }) => LoginApiResponse::Unauthorized(Json(
                ErrorResponse::new("Invalid email or password"),
            )),
            Err(LoginError::Internal(err)) => {
                tracing::error!("Login failed: {:?}", err);
                LoginApiResponse::InternalServerError(Json(ErrorResponse::new("Login failed")))
            }
        }
    }

    /// Current lockout state for an email address
    ///
    /// Always recomputed server-side so the login page countdown cannot go
    /// stale; clients poll this rather than counting down locally.
    #[oai(
        path = "/lockout-status",
        method = "get",
        tag = "AuthTags::Authentication"
    )]
    async fn lockout_status(&self, email: Query<String>) -> LockoutStatusApiResponse {
        match self.app_data.lockout_service.status(&email.0).await {
            Ok(status) => LockoutStatusApiResponse::Ok(Json(LockoutStatusResponse {
                locked: status.locked,
                remaining_seconds: status.remaining_seconds,
                failed_in_window: status.failed_in_window,
            })),
            Err(err) => {
                tracing::error!("Lockout status lookup failed: {:?}", err);
                LockoutStatusApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Status lookup failed",
                )))
            }
        }
    }
}
