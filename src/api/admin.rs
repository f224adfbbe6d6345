use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::auth::BearerAuth;
use crate::api::{authorize_admin, user_agent, AuthRejection};
use crate::app_data::AppData;
use crate::errors::{CatalogError, InternalError, ProfileError, RoleError};
use crate::services::BulkDirection;
use crate::stores::CarInput;
use crate::types::dto::admin::{
    ActivityLogApiResponse, ActivityLogResponse, ActivityLogView, BookingListApiResponse,
    BookingStatusApiResponse, BulkRoleApiResponse, BulkRoleRequest, BulkRoleResponse,
    InquiryListApiResponse, InquiryStatusApiResponse, LoginAttemptListApiResponse,
    MessageListApiResponse, MessageStatusApiResponse, RoleMutationApiResponse,
    RoleMutationRequest, ServiceRequestListApiResponse, ServiceRequestStatusApiResponse,
    StatusUpdateRequest, TradeInListApiResponse, TradeInStatusApiResponse, UserListApiResponse,
    UserListResponse, UserView,
};
use crate::types::dto::auth::LoginAttemptView;
use crate::types::dto::cars::{
    CarCreateApiResponse, CarDeleteApiResponse, CarInputRequest, CarUpdateApiResponse, CarView,
};
use crate::types::dto::common::{ErrorResponse, MessageResponse};
use crate::types::dto::customer::{
    BookingView, ContactMessageView, InquiryView, ServiceRequestView, TradeInView,
};
use crate::types::internal::activity::ActivityAction;
use crate::types::internal::roles::AppRole;

const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maps an `AuthRejection` into the endpoint's own response enum, which must
/// expose `Unauthorized` and `Forbidden` variants over `Json<ErrorResponse>`.
macro_rules! reject {
    ($response:ident, $rejection:expr) => {
        match $rejection {
            AuthRejection::Unauthorized => {
                return $response::Unauthorized(Json(ErrorResponse::new(
                    "Invalid or expired token",
                )))
            }
            AuthRejection::Forbidden => {
                return $response::Forbidden(Json(ErrorResponse::new("Admin role required")))
            }
        }
    };
}

/// Admin console API endpoints.
///
/// Every endpoint revalidates the bearer token and re-resolves the caller's
/// roles; nothing here trusts role information baked into the token.
pub struct AdminApi {
    app_data: Arc<AppData>,
}

impl AdminApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// User and role management
    Users,
    /// Activity audit trail
    Activity,
    /// Inventory management
    Inventory,
    /// Inquiry and booking triage
    Triage,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// List users with their resolved role sets
    #[oai(path = "/users", method = "get", tag = "AdminTags::Users")]
    async fn list_users(
        &self,
        auth: BearerAuth,
        search: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> UserListApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(UserListApiResponse, rejection);
        }

        let limit = limit.0.unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = offset.0.unwrap_or(0);
        let search = search.0;

        let result = async {
            let profiles = self
                .app_data
                .profile_store
                .list(search.as_deref(), limit, offset)
                .await?;
            let total = self.app_data.profile_store.count(search.as_deref()).await?;

            let ids: Vec<String> = profiles.iter().map(|p| p.id.clone()).collect();
            let mut role_map = self.app_data.role_store.roles_for_users(&ids).await?;

            let users = profiles
                .into_iter()
                .map(|p| UserView {
                    roles: role_map.remove(&p.id).unwrap_or_default().names(),
                    id: p.id,
                    email: p.email,
                    full_name: p.full_name,
                    phone: p.phone,
                    created_at: p.created_at,
                })
                .collect();

            Ok::<_, InternalError>(UserListResponse { users, total })
        }
        .await;

        match result {
            Ok(response) => UserListApiResponse::Ok(Json(response)),
            Err(err) => {
                tracing::error!("User listing failed: {:?}", err);
                UserListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Grant one role to one user
    #[oai(path = "/users/:user_id/roles", method = "post", tag = "AdminTags::Users")]
    async fn add_role(
        &self,
        req: &Request,
        auth: BearerAuth,
        user_id: Path<String>,
        body: Json<RoleMutationRequest>,
    ) -> RoleMutationApiResponse {
        let ctx = match authorize_admin(&self.app_data, &auth.0.token, user_agent(req)).await {
            Ok(ctx) => ctx,
            Err(rejection) => reject!(RoleMutationApiResponse, rejection),
        };

        let Some(role) = AppRole::parse(&body.role) else {
            return RoleMutationApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                "Unknown role: {}",
                body.role
            ))));
        };

        if let Err(err) = self.app_data.profile_store.find_by_id(&user_id.0).await {
            return role_target_error(err);
        }

        match self
            .app_data
            .role_service
            .add_role(&ctx, &user_id.0, role)
            .await
        {
            Ok(()) => RoleMutationApiResponse::Ok(Json(MessageResponse::new(format!(
                "Role {role} granted"
            )))),
            Err(err) => role_mutation_error(err),
        }
    }

    /// Revoke one role from one user
    #[oai(
        path = "/users/:user_id/roles/:role",
        method = "delete",
        tag = "AdminTags::Users"
    )]
    async fn remove_role(
        &self,
        req: &Request,
        auth: BearerAuth,
        user_id: Path<String>,
        role: Path<String>,
    ) -> RoleMutationApiResponse {
        let ctx = match authorize_admin(&self.app_data, &auth.0.token, user_agent(req)).await {
            Ok(ctx) => ctx,
            Err(rejection) => reject!(RoleMutationApiResponse, rejection),
        };

        let Some(role) = AppRole::parse(&role.0) else {
            return RoleMutationApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                "Unknown role: {}",
                role.0
            ))));
        };

        if let Err(err) = self.app_data.profile_store.find_by_id(&user_id.0).await {
            return role_target_error(err);
        }

        match self
            .app_data
            .role_service
            .remove_role(&ctx, &user_id.0, role)
            .await
        {
            Ok(()) => RoleMutationApiResponse::Ok(Json(MessageResponse::new(format!(
                "Role {role} revoked"
            )))),
            Err(err) => role_mutation_error(err),
        }
    }

    /// Apply one role change across a selection of users
    ///
    /// Best-effort batch: the acting admin and already-satisfied members are
    /// skipped, individual failures are counted without aborting the rest,
    /// and one aggregate activity entry records the batch.
    #[oai(path = "/users/bulk-roles", method = "post", tag = "AdminTags::Users")]
    async fn bulk_roles(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<BulkRoleRequest>,
    ) -> BulkRoleApiResponse {
        let ctx = match authorize_admin(&self.app_data, &auth.0.token, user_agent(req)).await {
            Ok(ctx) => ctx,
            Err(rejection) => reject!(BulkRoleApiResponse, rejection),
        };

        let Some(role) = AppRole::parse(&body.role) else {
            return BulkRoleApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                "Unknown role: {}",
                body.role
            ))));
        };
        let direction = match body.action.as_str() {
            "add" => BulkDirection::Add,
            "remove" => BulkDirection::Remove,
            other => {
                return BulkRoleApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown action: {other}"
                ))))
            }
        };

        match self
            .app_data
            .role_service
            .bulk_mutate(&ctx, &body.user_ids, direction, role)
            .await
        {
            Ok(outcome) => BulkRoleApiResponse::Ok(Json(BulkRoleResponse {
                mutated: outcome.mutated,
                skipped: outcome.skipped,
                failed: outcome.failed,
            })),
            Err(err) => {
                tracing::error!("Bulk role mutation failed: {:?}", err);
                BulkRoleApiResponse::InternalServerError(Json(ErrorResponse::new("Batch failed")))
            }
        }
    }

    /// Browse the activity log, newest first
    #[oai(path = "/activity", method = "get", tag = "AdminTags::Activity")]
    async fn list_activity(
        &self,
        auth: BearerAuth,
        action: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> ActivityLogApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(ActivityLogApiResponse, rejection);
        }

        let action_filter = match &action.0 {
            Some(name) => match ActivityAction::parse(name) {
                Some(parsed) => Some(parsed),
                None => {
                    return ActivityLogApiResponse::BadRequest(Json(ErrorResponse::new(
                        format!("Unknown action: {name}"),
                    )))
                }
            },
            None => None,
        };

        let limit = limit.0.unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = offset.0.unwrap_or(0);

        let result = async {
            let entries = self
                .app_data
                .activity_log_store
                .list(action_filter, limit, offset)
                .await?;
            let total = self.app_data.activity_log_store.count(action_filter).await?;
            Ok::<_, InternalError>(ActivityLogResponse {
                entries: entries.into_iter().map(ActivityLogView::from).collect(),
                total,
            })
        }
        .await;

        match result {
            Ok(response) => ActivityLogApiResponse::Ok(Json(response)),
            Err(err) => {
                tracing::error!("Activity log listing failed: {:?}", err);
                ActivityLogApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Login attempt history for one email address, newest first
    #[oai(path = "/login-attempts", method = "get", tag = "AdminTags::Activity")]
    async fn list_login_attempts(
        &self,
        auth: BearerAuth,
        email: Query<String>,
        limit: Query<Option<u64>>,
    ) -> LoginAttemptListApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(LoginAttemptListApiResponse, rejection);
        }

        let limit = limit.0.unwrap_or(DEFAULT_PAGE_SIZE);
        match self
            .app_data
            .lockout_service
            .recent_attempts(&email.0, limit)
            .await
        {
            Ok(attempts) => LoginAttemptListApiResponse::Ok(Json(
                attempts
                    .into_iter()
                    .map(|a| LoginAttemptView {
                        success: a.success,
                        failure_reason: a.failure_reason,
                        user_agent: a.user_agent,
                        created_at: a.created_at,
                    })
                    .collect(),
            )),
            Err(err) => {
                tracing::error!("Login attempt lookup failed: {:?}", err);
                LoginAttemptListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Lookup failed",
                )))
            }
        }
    }

    /// Add a car to the inventory
    #[oai(path = "/cars", method = "post", tag = "AdminTags::Inventory")]
    async fn create_car(
        &self,
        auth: BearerAuth,
        body: Json<CarInputRequest>,
    ) -> CarCreateApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(CarCreateApiResponse, rejection);
        }

        match self.app_data.car_store.create(car_input(body.0)).await {
            Ok(car) => CarCreateApiResponse::Ok(Json(CarView::from(car))),
            Err(InternalError::Catalog(CatalogError::InvalidStatus(status))) => {
                CarCreateApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown status: {status}"
                ))))
            }
            Err(err) => {
                tracing::error!("Car creation failed: {:?}", err);
                CarCreateApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Creation failed",
                )))
            }
        }
    }

    /// Replace a car listing
    #[oai(path = "/cars/:car_id", method = "put", tag = "AdminTags::Inventory")]
    async fn update_car(
        &self,
        auth: BearerAuth,
        car_id: Path<String>,
        body: Json<CarInputRequest>,
    ) -> CarUpdateApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(CarUpdateApiResponse, rejection);
        }

        match self
            .app_data
            .car_store
            .update(&car_id.0, car_input(body.0))
            .await
        {
            Ok(car) => CarUpdateApiResponse::Ok(Json(CarView::from(car))),
            Err(InternalError::Catalog(CatalogError::InvalidStatus(status))) => {
                CarUpdateApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown status: {status}"
                ))))
            }
            Err(InternalError::Catalog(CatalogError::CarNotFound(_))) => {
                CarUpdateApiResponse::NotFound(Json(ErrorResponse::new("Car not found")))
            }
            Err(err) => {
                tracing::error!("Car update failed: {:?}", err);
                CarUpdateApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Update failed",
                )))
            }
        }
    }

    /// Remove a car from the inventory
    #[oai(path = "/cars/:car_id", method = "delete", tag = "AdminTags::Inventory")]
    async fn delete_car(&self, auth: BearerAuth, car_id: Path<String>) -> CarDeleteApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(CarDeleteApiResponse, rejection);
        }

        match self.app_data.car_store.delete(&car_id.0).await {
            Ok(()) => CarDeleteApiResponse::Ok(Json(MessageResponse::new("Car deleted"))),
            Err(InternalError::Catalog(CatalogError::CarNotFound(_))) => {
                CarDeleteApiResponse::NotFound(Json(ErrorResponse::new("Car not found")))
            }
            Err(err) => {
                tracing::error!("Car deletion failed: {:?}", err);
                CarDeleteApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Deletion failed",
                )))
            }
        }
    }

    /// List customer inquiries for triage
    #[oai(path = "/inquiries", method = "get", tag = "AdminTags::Triage")]
    async fn list_inquiries(
        &self,
        auth: BearerAuth,
        status: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> InquiryListApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(InquiryListApiResponse, rejection);
        }

        match self
            .app_data
            .inquiry_store
            .list_inquiries(
                status.0.as_deref(),
                limit.0.unwrap_or(DEFAULT_PAGE_SIZE),
                offset.0.unwrap_or(0),
            )
            .await
        {
            Ok(inquiries) => InquiryListApiResponse::Ok(Json(
                inquiries.into_iter().map(InquiryView::from).collect(),
            )),
            Err(err) => {
                tracing::error!("Inquiry listing failed: {:?}", err);
                InquiryListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Update an inquiry's triage status
    #[oai(
        path = "/inquiries/:inquiry_id/status",
        method = "patch",
        tag = "AdminTags::Triage"
    )]
    async fn set_inquiry_status(
        &self,
        auth: BearerAuth,
        inquiry_id: Path<String>,
        body: Json<StatusUpdateRequest>,
    ) -> InquiryStatusApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(InquiryStatusApiResponse, rejection);
        }

        match self
            .app_data
            .inquiry_store
            .set_inquiry_status(&inquiry_id.0, &body.status)
            .await
        {
            Ok(inquiry) => InquiryStatusApiResponse::Ok(Json(InquiryView::from(inquiry))),
            Err(InternalError::Catalog(CatalogError::InvalidStatus(status))) => {
                InquiryStatusApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown status: {status}"
                ))))
            }
            Err(InternalError::Catalog(CatalogError::InquiryNotFound(_))) => {
                InquiryStatusApiResponse::NotFound(Json(ErrorResponse::new("Inquiry not found")))
            }
            Err(err) => {
                tracing::error!("Inquiry triage failed: {:?}", err);
                InquiryStatusApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Update failed",
                )))
            }
        }
    }

    /// List contact messages for triage
    #[oai(path = "/messages", method = "get", tag = "AdminTags::Triage")]
    async fn list_messages(
        &self,
        auth: BearerAuth,
        status: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> MessageListApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(MessageListApiResponse, rejection);
        }

        match self
            .app_data
            .inquiry_store
            .list_messages(
                status.0.as_deref(),
                limit.0.unwrap_or(DEFAULT_PAGE_SIZE),
                offset.0.unwrap_or(0),
            )
            .await
        {
            Ok(messages) => MessageListApiResponse::Ok(Json(
                messages.into_iter().map(ContactMessageView::from).collect(),
            )),
            Err(err) => {
                tracing::error!("Contact message listing failed: {:?}", err);
                MessageListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Update a contact message's triage status
    #[oai(
        path = "/messages/:message_id/status",
        method = "patch",
        tag = "AdminTags::Triage"
    )]
    async fn set_message_status(
        &self,
        auth: BearerAuth,
        message_id: Path<String>,
        body: Json<StatusUpdateRequest>,
    ) -> MessageStatusApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(MessageStatusApiResponse, rejection);
        }

        match self
            .app_data
            .inquiry_store
            .set_message_status(&message_id.0, &body.status)
            .await
        {
            Ok(message) => MessageStatusApiResponse::Ok(Json(ContactMessageView::from(message))),
            Err(InternalError::Catalog(CatalogError::InvalidStatus(status))) => {
                MessageStatusApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown status: {status}"
                ))))
            }
            Err(InternalError::Catalog(CatalogError::MessageNotFound(_))) => {
                MessageStatusApiResponse::NotFound(Json(ErrorResponse::new("Message not found")))
            }
            Err(err) => {
                tracing::error!("Contact message triage failed: {:?}", err);
                MessageStatusApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Update failed",
                )))
            }
        }
    }

    /// List test-drive bookings for triage
    #[oai(path = "/bookings", method = "get", tag = "AdminTags::Triage")]
    async fn list_bookings(
        &self,
        auth: BearerAuth,
        status: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> BookingListApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(BookingListApiResponse, rejection);
        }

        match self
            .app_data
            .booking_store
            .list_bookings(
                status.0.as_deref(),
                limit.0.unwrap_or(DEFAULT_PAGE_SIZE),
                offset.0.unwrap_or(0),
            )
            .await
        {
            Ok(bookings) => BookingListApiResponse::Ok(Json(
                bookings.into_iter().map(BookingView::from).collect(),
            )),
            Err(err) => {
                tracing::error!("Booking listing failed: {:?}", err);
                BookingListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Update a booking's status
    #[oai(
        path = "/bookings/:booking_id/status",
        method = "patch",
        tag = "AdminTags::Triage"
    )]
    async fn set_booking_status(
        &self,
        auth: BearerAuth,
        booking_id: Path<String>,
        body: Json<StatusUpdateRequest>,
    ) -> BookingStatusApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(BookingStatusApiResponse, rejection);
        }

        match self
            .app_data
            .booking_store
            .set_booking_status(&booking_id.0, &body.status)
            .await
        {
            Ok(booking) => BookingStatusApiResponse::Ok(Json(BookingView::from(booking))),
            Err(InternalError::Catalog(CatalogError::InvalidStatus(status))) => {
                BookingStatusApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown status: {status}"
                ))))
            }
            Err(InternalError::Catalog(CatalogError::BookingNotFound(_))) => {
                BookingStatusApiResponse::NotFound(Json(ErrorResponse::new("Booking not found")))
            }
            Err(err) => {
                tracing::error!("Booking triage failed: {:?}", err);
                BookingStatusApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Update failed",
                )))
            }
        }
    }

    /// List trade-in requests for triage
    #[oai(path = "/trade-ins", method = "get", tag = "AdminTags::Triage")]
    async fn list_trade_ins(
        &self,
        auth: BearerAuth,
        status: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> TradeInListApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(TradeInListApiResponse, rejection);
        }

        match self
            .app_data
            .booking_store
            .list_trade_ins(
                status.0.as_deref(),
                limit.0.unwrap_or(DEFAULT_PAGE_SIZE),
                offset.0.unwrap_or(0),
            )
            .await
        {
            Ok(requests) => TradeInListApiResponse::Ok(Json(
                requests.into_iter().map(TradeInView::from).collect(),
            )),
            Err(err) => {
                tracing::error!("Trade-in listing failed: {:?}", err);
                TradeInListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Update a trade-in request's status
    #[oai(
        path = "/trade-ins/:request_id/status",
        method = "patch",
        tag = "AdminTags::Triage"
    )]
    async fn set_trade_in_status(
        &self,
        auth: BearerAuth,
        request_id: Path<String>,
        body: Json<StatusUpdateRequest>,
    ) -> TradeInStatusApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(TradeInStatusApiResponse, rejection);
        }

        match self
            .app_data
            .booking_store
            .set_trade_in_status(&request_id.0, &body.status)
            .await
        {
            Ok(request) => TradeInStatusApiResponse::Ok(Json(TradeInView::from(request))),
            Err(InternalError::Catalog(CatalogError::InvalidStatus(status))) => {
                TradeInStatusApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown status: {status}"
                ))))
            }
            Err(InternalError::Catalog(CatalogError::TradeInNotFound(_))) => {
                TradeInStatusApiResponse::NotFound(Json(ErrorResponse::new(
                    "Trade-in request not found",
                )))
            }
            Err(err) => {
                tracing::error!("Trade-in triage failed: {:?}", err);
                TradeInStatusApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Update failed",
                )))
            }
        }
    }

    /// List workshop service requests for triage
    #[oai(path = "/service-requests", method = "get", tag = "AdminTags::Triage")]
    async fn list_service_requests(
        &self,
        auth: BearerAuth,
        status: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> ServiceRequestListApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(ServiceRequestListApiResponse, rejection);
        }

        match self
            .app_data
            .booking_store
            .list_service_requests(
                status.0.as_deref(),
                limit.0.unwrap_or(DEFAULT_PAGE_SIZE),
                offset.0.unwrap_or(0),
            )
            .await
        {
            Ok(requests) => ServiceRequestListApiResponse::Ok(Json(
                requests.into_iter().map(ServiceRequestView::from).collect(),
            )),
            Err(err) => {
                tracing::error!("Service request listing failed: {:?}", err);
                ServiceRequestListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Update a service request's status
    #[oai(
        path = "/service-requests/:request_id/status",
        method = "patch",
        tag = "AdminTags::Triage"
    )]
    async fn set_service_request_status(
        &self,
        auth: BearerAuth,
        request_id: Path<String>,
        body: Json<StatusUpdateRequest>,
    ) -> ServiceRequestStatusApiResponse {
        if let Err(rejection) = authorize_admin(&self.app_data, &auth.0.token, None).await {
            reject!(ServiceRequestStatusApiResponse, rejection);
        }

        match self
            .app_data
            .booking_store
            .set_service_request_status(&request_id.0, &body.status)
            .await
        {
            Ok(request) => {
                ServiceRequestStatusApiResponse::Ok(Json(ServiceRequestView::from(request)))
            }
            Err(InternalError::Catalog(CatalogError::InvalidStatus(status))) => {
                ServiceRequestStatusApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown status: {status}"
                ))))
            }
            Err(InternalError::Catalog(CatalogError::ServiceRequestNotFound(_))) => {
                ServiceRequestStatusApiResponse::NotFound(Json(ErrorResponse::new(
                    "Service request not found",
                )))
            }
            Err(err) => {
                tracing::error!("Service request triage failed: {:?}", err);
                ServiceRequestStatusApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Update failed",
                )))
            }
        }
    }
}

/// Build the store-level input from the request body, applying defaults
fn car_input(request: CarInputRequest) -> CarInput {
    CarInput {
        name: request.name,
        brand: request.brand,
        category: request.category,
        price: request.price,
        year: request.year,
        mileage: request.mileage,
        fuel_type: request.fuel_type,
        transmission: request.transmission,
        description: request.description,
        image_url: request.image_url,
        featured: request.featured.unwrap_or(false),
        status: request.status.unwrap_or_else(|| "available".to_string()),
    }
}

/// Map a target-profile lookup failure for role mutations
fn role_target_error(err: InternalError) -> RoleMutationApiResponse {
    match err {
        InternalError::Profile(ProfileError::NotFound(_)) => {
            RoleMutationApiResponse::NotFound(Json(ErrorResponse::new("User not found")))
        }
        other => {
            tracing::error!("Target lookup failed: {:?}", other);
            RoleMutationApiResponse::InternalServerError(Json(ErrorResponse::new(
                "Mutation failed",
            )))
        }
    }
}

/// Map a role-service failure onto the mutation response enum
fn role_mutation_error(err: InternalError) -> RoleMutationApiResponse {
    match err {
        InternalError::Role(RoleError::SelfModificationDenied) => {
            RoleMutationApiResponse::Forbidden(Json(ErrorResponse::new(
                "You cannot modify your own roles",
            )))
        }
        InternalError::Role(RoleError::AlreadyAssigned { .. }) => {
            RoleMutationApiResponse::Conflict(Json(ErrorResponse::new(
                "User already holds that role",
            )))
        }
        InternalError::Role(RoleError::NotAssigned { .. }) => RoleMutationApiResponse::Conflict(
            Json(ErrorResponse::new("User does not hold that role")),
        ),
        other => {
            tracing::error!("Role mutation failed: {:?}", other);
            RoleMutationApiResponse::InternalServerError(Json(ErrorResponse::new(
                "Mutation failed",
            )))
        }
    }
}
