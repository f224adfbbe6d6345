use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::activity_log;
use crate::types::dto::auth::LoginAttemptView;
use crate::types::dto::common::{ErrorResponse, MessageResponse};
use crate::types::dto::customer::{
    BookingView, ContactMessageView, InquiryView, ServiceRequestView, TradeInView,
};

/// One row in the admin user table
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserView {
    /// User ID (UUID)
    pub id: String,

    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,

    /// Role names currently held; empty means plain user
    pub roles: Vec<String>,

    /// Registration time (Unix timestamp)
    pub created_at: i64,
}

/// Paginated user listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserView>,

    /// Total matching users before pagination
    pub total: u64,
}

/// Request model for a single-role grant
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RoleMutationRequest {
    /// Role name to grant (admin, moderator, user)
    pub role: String,
}

/// Request model for a bulk role mutation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BulkRoleRequest {
    /// Selected user IDs; the acting admin is skipped if present
    pub user_ids: Vec<String>,

    /// "add" or "remove"
    pub action: String,

    /// Role name to apply
    pub role: String,
}

/// Aggregate counts for a bulk role mutation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BulkRoleResponse {
    /// Members whose role rows actually changed
    pub mutated: u64,

    /// Members skipped (the actor, or already satisfied)
    pub skipped: u64,

    /// Members whose individual mutation errored
    pub failed: u64,
}

/// One activity log entry
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ActivityLogView {
    pub id: i64,
    pub actor_id: String,
    pub action: String,
    pub target_user_id: Option<String>,
    pub target_name: Option<String>,

    /// JSON object with action-specific details, serialized to text
    pub details: String,

    pub created_at: i64,
}

impl From<activity_log::Model> for ActivityLogView {
    fn from(model: activity_log::Model) -> Self {
        Self {
            id: model.id,
            actor_id: model.actor_id,
            action: model.action,
            target_user_id: model.target_user_id,
            target_name: model.target_name,
            details: model.details,
            created_at: model.created_at,
        }
    }
}

/// Paginated activity log listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ActivityLogResponse {
    pub entries: Vec<ActivityLogView>,

    /// Total matching entries before pagination
    pub total: u64,
}

/// Request model for triage status updates
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    /// New status value
    pub status: String,
}

/// API response for the admin user listing
#[derive(ApiResponse)]
pub enum UserListApiResponse {
    /// Matching users with resolved roles
    #[oai(status = 200)]
    Ok(Json<UserListResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for single-role grant and revocation
#[derive(ApiResponse)]
pub enum RoleMutationApiResponse {
    /// Role row changed
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),

    /// Unknown role name
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin, or tried to modify their own roles
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Target user not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Role already held, or not held on removal
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Mutation failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for bulk role mutations
#[derive(ApiResponse)]
pub enum BulkRoleApiResponse {
    /// Aggregate batch outcome
    #[oai(status = 200)]
    Ok(Json<BulkRoleResponse>),

    /// Unknown role name or action
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Batch failed before starting
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the activity log listing
#[derive(ApiResponse)]
pub enum ActivityLogApiResponse {
    /// Matching entries, newest first
    #[oai(status = 200)]
    Ok(Json<ActivityLogResponse>),

    /// Unknown action filter
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for admin inquiry listing
#[derive(ApiResponse)]
pub enum InquiryListApiResponse {
    /// Matching inquiries, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<InquiryView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for inquiry triage
#[derive(ApiResponse)]
pub enum InquiryStatusApiResponse {
    /// Updated inquiry
    #[oai(status = 200)]
    Ok(Json<InquiryView>),

    /// Unknown status value
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No inquiry with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Update failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for admin contact message listing
#[derive(ApiResponse)]
pub enum MessageListApiResponse {
    /// Matching messages, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<ContactMessageView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for contact message triage
#[derive(ApiResponse)]
pub enum MessageStatusApiResponse {
    /// Updated message
    #[oai(status = 200)]
    Ok(Json<ContactMessageView>),

    /// Unknown status value
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No message with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Update failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for admin booking listing
#[derive(ApiResponse)]
pub enum BookingListApiResponse {
    /// Matching bookings, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<BookingView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for booking triage
#[derive(ApiResponse)]
pub enum BookingStatusApiResponse {
    /// Updated booking
    #[oai(status = 200)]
    Ok(Json<BookingView>),

    /// Unknown status value
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No booking with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Update failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for admin trade-in listing
#[derive(ApiResponse)]
pub enum TradeInListApiResponse {
    /// Matching trade-in requests, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<TradeInView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for trade-in triage
#[derive(ApiResponse)]
pub enum TradeInStatusApiResponse {
    /// Updated trade-in request
    #[oai(status = 200)]
    Ok(Json<TradeInView>),

    /// Unknown status value
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No trade-in request with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Update failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for admin service-request listing
#[derive(ApiResponse)]
pub enum ServiceRequestListApiResponse {
    /// Matching service requests, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<ServiceRequestView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for service-request triage
#[derive(ApiResponse)]
pub enum ServiceRequestStatusApiResponse {
    /// Updated service request
    #[oai(status = 200)]
    Ok(Json<ServiceRequestView>),

    /// Unknown status value
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No service request with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Update failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the admin login-attempt history view
#[derive(ApiResponse)]
pub enum LoginAttemptListApiResponse {
    /// Attempts for the email, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<LoginAttemptView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Lookup failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}
