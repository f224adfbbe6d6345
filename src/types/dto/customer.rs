use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::{
    contact_message, inquiry, service_request, test_drive_booking, trade_in_request,
};
use crate::types::dto::auth::ProfileView;
use crate::types::dto::cars::CarView;
use crate::types::dto::common::{ErrorResponse, MessageResponse};

/// Request model for booking a test drive
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Name of the car to test drive
    pub car_name: String,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,

    /// Preferred date (YYYY-MM-DD)
    pub preferred_date: String,

    /// Preferred time slot
    pub preferred_time: String,

    /// Free-form notes for the dealership
    pub notes: Option<String>,
}

/// View of one test-drive booking
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct BookingView {
    pub id: String,
    pub car_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: i64,
}

impl From<test_drive_booking::Model> for BookingView {
    fn from(model: test_drive_booking::Model) -> Self {
        Self {
            id: model.id,
            car_name: model.car_name,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
            preferred_date: model.preferred_date,
            preferred_time: model.preferred_time,
            status: model.status,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

/// Request model for a trade-in valuation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TradeInRequestBody {
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,

    /// Odometer reading in kilometers
    pub mileage: i32,

    /// Condition grade (excellent, good, fair, poor)
    pub condition: String,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
}

/// View of one trade-in request
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TradeInView {
    pub id: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub mileage: i32,
    pub condition: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: String,
    pub created_at: i64,
}

impl From<trade_in_request::Model> for TradeInView {
    fn from(model: trade_in_request::Model) -> Self {
        Self {
            id: model.id,
            vehicle_make: model.vehicle_make,
            vehicle_model: model.vehicle_model,
            vehicle_year: model.vehicle_year,
            mileage: model.mileage,
            condition: model.condition,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Request model for booking a workshop service
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ServiceRequestBody {
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Requested service (maintenance, diagnostics, detailing, ...)
    pub service_type: String,

    /// Make, model, and year of the vehicle being serviced
    pub vehicle_details: Option<String>,

    /// Preferred date (YYYY-MM-DD)
    pub preferred_date: Option<String>,

    pub notes: Option<String>,
}

/// View of one service request
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ServiceRequestView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub vehicle_details: Option<String>,
    pub preferred_date: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: i64,
}

impl From<service_request::Model> for ServiceRequestView {
    fn from(model: service_request::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            service_type: model.service_type,
            vehicle_details: model.vehicle_details,
            preferred_date: model.preferred_date,
            notes: model.notes,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Request model for a car inquiry
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct InquiryRequest {
    /// Car the inquiry is about, if any
    pub car_id: Option<String>,

    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,

    /// The question or request text
    pub message: String,

    /// Inquiry kind (test_drive, trade_in, purchase, general)
    pub kind: String,
}

/// View of one inquiry
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct InquiryView {
    pub id: String,
    pub car_id: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub message: String,
    pub kind: String,
    pub status: String,
    pub created_at: i64,
}

impl From<inquiry::Model> for InquiryView {
    fn from(model: inquiry::Model) -> Self {
        Self {
            id: model.id,
            car_id: model.car_id,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
            message: model.message,
            kind: model.kind,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Request model for the contact form
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ContactMessageRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// View of one contact message
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ContactMessageView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: i64,
}

impl From<contact_message::Model> for ContactMessageView {
    fn from(model: contact_message::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Request model for adding a favorite
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct FavoriteRequest {
    /// Car to add to the wishlist
    pub car_id: String,
}

/// Request model for profile self-service updates
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
}

/// API response for submitting a test-drive booking
#[derive(ApiResponse)]
pub enum BookingApiResponse {
    /// Booking recorded
    #[oai(status = 200)]
    Ok(Json<BookingView>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Booking failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the authenticated user's bookings
#[derive(ApiResponse)]
pub enum MyBookingsApiResponse {
    /// Bookings, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<BookingView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for submitting a trade-in request
#[derive(ApiResponse)]
pub enum TradeInApiResponse {
    /// Request recorded
    #[oai(status = 200)]
    Ok(Json<TradeInView>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Submission failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for submitting a service request
#[derive(ApiResponse)]
pub enum ServiceRequestApiResponse {
    /// Request recorded
    #[oai(status = 200)]
    Ok(Json<ServiceRequestView>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Submission failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for submitting an inquiry
#[derive(ApiResponse)]
pub enum InquiryApiResponse {
    /// Inquiry recorded
    #[oai(status = 200)]
    Ok(Json<InquiryView>),

    /// Unknown inquiry kind
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Submission failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the contact form
#[derive(ApiResponse)]
pub enum ContactApiResponse {
    /// Message recorded
    #[oai(status = 200)]
    Ok(Json<ContactMessageView>),

    /// Submission failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for the favorites listing
#[derive(ApiResponse)]
pub enum FavoriteListApiResponse {
    /// Wishlist cars, newest first
    #[oai(status = 200)]
    Ok(Json<Vec<CarView>>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for adding or removing a favorite
#[derive(ApiResponse)]
pub enum FavoriteMutationApiResponse {
    /// Wishlist updated
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Car or favorite not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Car already in the wishlist
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),

    /// Mutation failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for profile reads and updates
#[derive(ApiResponse)]
pub enum ProfileApiResponse {
    /// The profile, roles included
    #[oai(status = 200)]
    Ok(Json<ProfileView>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Operation failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}
