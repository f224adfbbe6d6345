use std::sync::Arc;

use poem::Request;
use poem_openapi::param::Path;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::auth::BearerAuth;
use crate::api::bearer_token;
use crate::app_data::AppData;
use crate::errors::{CatalogError, InternalError};
use crate::services::TestDriveNotification;
use crate::stores::{BookingInput, ServiceRequestInput, TradeInInput};
use crate::types::dto::auth::ProfileView;
use crate::types::dto::cars::CarView;
use crate::types::dto::common::{ErrorResponse, MessageResponse};
use crate::types::dto::customer::{
    BookingApiResponse, BookingRequest, BookingView, ContactApiResponse, ContactMessageRequest,
    ContactMessageView, FavoriteListApiResponse, FavoriteMutationApiResponse, FavoriteRequest,
    InquiryApiResponse, InquiryRequest, InquiryView, MyBookingsApiResponse, ProfileApiResponse,
    ServiceRequestApiResponse, ServiceRequestBody, ServiceRequestView, TradeInApiResponse,
    TradeInRequestBody, TradeInView, UpdateProfileRequest,
};

/// Customer-facing API endpoints: bookings, trade-ins, inquiries, the contact
/// form, the wishlist, and profile self-service.
///
/// Submission endpoints are public; a bearer token, when present, only links
/// the record to the account. Wishlist and profile endpoints require one.
pub struct CustomerApi {
    app_data: Arc<AppData>,
}

impl CustomerApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }

    /// User ID from the Authorization header, if one was sent. A missing or
    /// invalid token degrades to anonymous rather than rejecting the
    /// submission.
    fn optional_user_id(&self, req: &Request) -> Option<String> {
        bearer_token(req)
            .and_then(|token| self.app_data.auth_service.validate_token(token))
            .map(|claims| claims.sub)
    }
}

/// API tags for customer endpoints
#[derive(Tags)]
enum CustomerTags {
    /// Customer self-service
    Customer,
}

#[OpenApi]
impl CustomerApi {
    /// Book a test drive
    ///
    /// Confirmation email is fired in the background; delivery failure never
    /// fails the booking.
    #[oai(path = "/bookings", method = "post", tag = "CustomerTags::Customer")]
    async fn create_booking(
        &self,
        req: &Request,
        body: Json<BookingRequest>,
    ) -> BookingApiResponse {
        if !body.customer_email.contains('@') {
            return BookingApiResponse::BadRequest(Json(ErrorResponse::new(
                "A valid email address is required",
            )));
        }
        if body.preferred_date.is_empty() || body.preferred_time.is_empty() {
            return BookingApiResponse::BadRequest(Json(ErrorResponse::new(
                "Preferred date and time are required",
            )));
        }

        let request = body.0;
        let input = BookingInput {
            user_id: self.optional_user_id(req),
            car_name: request.car_name,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            customer_phone: request.customer_phone,
            preferred_date: request.preferred_date,
            preferred_time: request.preferred_time,
            notes: request.notes,
        };

        let booking = match self.app_data.booking_store.create_booking(input).await {
            Ok(booking) => booking,
            Err(err) => {
                tracing::error!("Booking creation failed: {:?}", err);
                return BookingApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Booking failed",
                )));
            }
        };

        let notification = TestDriveNotification {
            customer_email: booking.customer_email.clone(),
            customer_name: booking.customer_name.clone(),
            car_name: booking.car_name.clone(),
            date: booking.preferred_date.clone(),
            time: booking.preferred_time.clone(),
            phone: booking.customer_phone.clone(),
        };
        let notifier = self.app_data.notification_service.clone();
        tokio::spawn(async move {
            if let Err(err) = notifier.send_test_drive_confirmation(&notification).await {
                tracing::error!("Test drive confirmation email failed: {:?}", err);
            }
        });

        BookingApiResponse::Ok(Json(BookingView::from(booking)))
    }

    /// The authenticated user's test-drive bookings, newest first
    #[oai(
        path = "/bookings/mine",
        method = "get",
        tag = "CustomerTags::Customer"
    )]
    async fn my_bookings(&self, auth: BearerAuth) -> MyBookingsApiResponse {
        let Some(claims) = self.app_data.auth_service.validate_token(&auth.0.token) else {
            return MyBookingsApiResponse::Unauthorized(Json(ErrorResponse::new(
                "Invalid or expired token",
            )));
        };

        match self
            .app_data
            .booking_store
            .bookings_for_user(&claims.sub)
            .await
        {
            Ok(bookings) => MyBookingsApiResponse::Ok(Json(
                bookings.into_iter().map(BookingView::from).collect(),
            )),
            Err(err) => {
                tracing::error!("Booking listing failed: {:?}", err);
                MyBookingsApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Request a trade-in valuation
    #[oai(path = "/trade-ins", method = "post", tag = "CustomerTags::Customer")]
    async fn create_trade_in(
        &self,
        req: &Request,
        body: Json<TradeInRequestBody>,
    ) -> TradeInApiResponse {
        if !body.customer_email.contains('@') {
            return TradeInApiResponse::BadRequest(Json(ErrorResponse::new(
                "A valid email address is required",
            )));
        }

        let request = body.0;
        let input = TradeInInput {
            user_id: self.optional_user_id(req),
            vehicle_make: request.vehicle_make,
            vehicle_model: request.vehicle_model,
            vehicle_year: request.vehicle_year,
            mileage: request.mileage,
            condition: request.condition,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            customer_phone: request.customer_phone,
        };

        match self.app_data.booking_store.create_trade_in(input).await {
            Ok(request) => TradeInApiResponse::Ok(Json(TradeInView::from(request))),
            Err(err) => {
                tracing::error!("Trade-in creation failed: {:?}", err);
                TradeInApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Submission failed",
                )))
            }
        }
    }

    /// Book a workshop service appointment
    #[oai(
        path = "/service-requests",
        method = "post",
        tag = "CustomerTags::Customer"
    )]
    async fn create_service_request(
        &self,
        req: &Request,
        body: Json<ServiceRequestBody>,
    ) -> ServiceRequestApiResponse {
        if !body.email.contains('@') {
            return ServiceRequestApiResponse::BadRequest(Json(ErrorResponse::new(
                "A valid email address is required",
            )));
        }
        if body.name.is_empty() || body.phone.is_empty() || body.service_type.is_empty() {
            return ServiceRequestApiResponse::BadRequest(Json(ErrorResponse::new(
                "Name, phone, and service type are required",
            )));
        }

        let request = body.0;
        let input = ServiceRequestInput {
            user_id: self.optional_user_id(req),
            name: request.name,
            email: request.email,
            phone: request.phone,
            service_type: request.service_type,
            vehicle_details: request.vehicle_details,
            preferred_date: request.preferred_date,
            notes: request.notes,
        };

        match self.app_data.booking_store.create_service_request(input).await {
            Ok(request) => ServiceRequestApiResponse::Ok(Json(ServiceRequestView::from(request))),
            Err(err) => {
                tracing::error!("Service request creation failed: {:?}", err);
                ServiceRequestApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Submission failed",
                )))
            }
        }
    }

    /// Submit a car inquiry
    #[oai(path = "/inquiries", method = "post", tag = "CustomerTags::Customer")]
    async fn create_inquiry(&self, body: Json<InquiryRequest>) -> InquiryApiResponse {
        let request = body.0;
        match self
            .app_data
            .inquiry_store
            .create_inquiry(
                request.car_id,
                request.customer_name,
                request.customer_email,
                request.customer_phone,
                request.message,
                request.kind,
            )
            .await
        {
            Ok(inquiry) => InquiryApiResponse::Ok(Json(InquiryView::from(inquiry))),
            Err(InternalError::Catalog(CatalogError::InvalidStatus(kind))) => {
                InquiryApiResponse::BadRequest(Json(ErrorResponse::new(format!(
                    "Unknown inquiry kind: {kind}"
                ))))
            }
            Err(err) => {
                tracing::error!("Inquiry creation failed: {:?}", err);
                InquiryApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Submission failed",
                )))
            }
        }
    }

    /// Submit a contact form message
    #[oai(path = "/contact", method = "post", tag = "CustomerTags::Customer")]
    async fn create_contact_message(
        &self,
        body: Json<ContactMessageRequest>,
    ) -> ContactApiResponse {
        let request = body.0;
        match self
            .app_data
            .inquiry_store
            .create_message(request.name, request.email, request.subject, request.message)
            .await
        {
            Ok(message) => ContactApiResponse::Ok(Json(ContactMessageView::from(message))),
            Err(err) => {
                tracing::error!("Contact message creation failed: {:?}", err);
                ContactApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Submission failed",
                )))
            }
        }
    }

    /// The authenticated user's wishlist, resolved to cars
    #[oai(path = "/favorites", method = "get", tag = "CustomerTags::Customer")]
    async fn list_favorites(&self, auth: BearerAuth) -> FavoriteListApiResponse {
        let Some(claims) = self.app_data.auth_service.validate_token(&auth.0.token) else {
            return FavoriteListApiResponse::Unauthorized(Json(ErrorResponse::new(
                "Invalid or expired token",
            )));
        };

        match self.app_data.favorite_store.list_for_user(&claims.sub).await {
            Ok(cars) => {
                FavoriteListApiResponse::Ok(Json(cars.into_iter().map(CarView::from).collect()))
            }
            Err(err) => {
                tracing::error!("Favorite listing failed: {:?}", err);
                FavoriteListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )))
            }
        }
    }

    /// Add a car to the wishlist
    #[oai(path = "/favorites", method = "post", tag = "CustomerTags::Customer")]
    async fn add_favorite(
        &self,
        auth: BearerAuth,
        body: Json<FavoriteRequest>,
    ) -> FavoriteMutationApiResponse {
        let Some(claims) = self.app_data.auth_service.validate_token(&auth.0.token) else {
            return FavoriteMutationApiResponse::Unauthorized(Json(ErrorResponse::new(
                "Invalid or expired token",
            )));
        };

        // Resolve the car first so a bad ID is a 404, not a constraint error
        if let Err(err) = self.app_data.car_store.get(&body.car_id).await {
            return match err {
                InternalError::Catalog(CatalogError::CarNotFound(_)) => {
                    FavoriteMutationApiResponse::NotFound(Json(ErrorResponse::new(
                        "Car not found",
                    )))
                }
                other => {
                    tracing::error!("Car lookup failed: {:?}", other);
                    FavoriteMutationApiResponse::InternalServerError(Json(ErrorResponse::new(
                        "Mutation failed",
                    )))
                }
            };
        }

        match self
            .app_data
            .favorite_store
            .add(&claims.sub, &body.car_id)
            .await
        {
            Ok(()) => FavoriteMutationApiResponse::Ok(Json(MessageResponse::new(
                "Car added to favorites",
            ))),
            Err(InternalError::Catalog(CatalogError::FavoriteExists(_))) => {
                FavoriteMutationApiResponse::Conflict(Json(ErrorResponse::new(
                    "Car is already in favorites",
                )))
            }
            Err(err) => {
                tracing::error!("Favorite add failed: {:?}", err);
                FavoriteMutationApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Mutation failed",
                )))
            }
        }
    }

    /// Remove a car from the wishlist
    #[oai(
        path = "/favorites/:car_id",
        method = "delete",
        tag = "CustomerTags::Customer"
    )]
    async fn remove_favorite(
        &self,
        auth: BearerAuth,
        car_id: Path<String>,
    ) -> FavoriteMutationApiResponse {
        let Some(claims) = self.app_data.auth_service.validate_token(&auth.0.token) else {
            return FavoriteMutationApiResponse::Unauthorized(Json(ErrorResponse::new(
                "Invalid or expired token",
            )));
        };

        match self
            .app_data
            .favorite_store
            .remove(&claims.sub, &car_id.0)
            .await
        {
            Ok(()) => FavoriteMutationApiResponse::Ok(Json(MessageResponse::new(
                "Car removed from favorites",
            ))),
            Err(InternalError::Catalog(CatalogError::FavoriteNotFound(_))) => {
                FavoriteMutationApiResponse::NotFound(Json(ErrorResponse::new(
                    "Favorite not found",
                )))
            }
            Err(err) => {
                tracing::error!("Favorite removal failed: {:?}", err);
                FavoriteMutationApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Mutation failed",
                )))
            }
        }
    }

    /// The authenticated user's own profile, roles included
    #[oai(path = "/profile", method = "get", tag = "CustomerTags::Customer")]
    async fn get_profile(&self, auth: BearerAuth) -> ProfileApiResponse {
        let Some(claims) = self.app_data.auth_service.validate_token(&auth.0.token) else {
            return ProfileApiResponse::Unauthorized(Json(ErrorResponse::new(
                "Invalid or expired token",
            )));
        };

        self.profile_view(&claims.sub).await
    }

    /// Update the authenticated user's profile fields
    #[oai(path = "/profile", method = "put", tag = "CustomerTags::Customer")]
    async fn update_profile(
        &self,
        auth: BearerAuth,
        body: Json<UpdateProfileRequest>,
    ) -> ProfileApiResponse {
        let Some(claims) = self.app_data.auth_service.validate_token(&auth.0.token) else {
            return ProfileApiResponse::Unauthorized(Json(ErrorResponse::new(
                "Invalid or expired token",
            )));
        };

        let request = body.0;
        if let Err(err) = self
            .app_data
            .profile_store
            .update_profile(
                &claims.sub,
                request.full_name,
                request.phone,
                request.avatar_url,
                request.bio,
            )
            .await
        {
            tracing::error!("Profile update failed: {:?}", err);
            return ProfileApiResponse::InternalServerError(Json(ErrorResponse::new(
                "Update failed",
            )));
        }

        self.profile_view(&claims.sub).await
    }
}

impl CustomerApi {
    async fn profile_view(&self, user_id: &str) -> ProfileApiResponse {
        let profile = match self.app_data.profile_store.find_by_id(user_id).await {
            Ok(profile) => profile,
            Err(err) => {
                tracing::error!("Profile lookup failed: {:?}", err);
                return ProfileApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Lookup failed",
                )));
            }
        };

        let roles = match self.app_data.role_service.roles_for_user(user_id).await {
            Ok(roles) => roles.names(),
            Err(err) => {
                tracing::error!("Role resolution failed: {:?}", err);
                Vec::new()
            }
        };

        ProfileApiResponse::Ok(Json(ProfileView::from_model(profile, roles)))
    }
}
