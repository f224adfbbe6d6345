use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::car;
use crate::types::dto::common::{ErrorResponse, MessageResponse};

/// Request model for creating or replacing a car listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CarInputRequest {
    /// Model name shown in listings
    pub name: String,

    /// Manufacturer brand
    pub brand: String,

    /// Body category (SUV, sedan, ...)
    pub category: String,

    /// Price in whole currency units
    pub price: i64,

    /// Model year
    pub year: i32,

    /// Odometer reading in kilometers
    pub mileage: i32,

    /// Fuel type
    pub fuel_type: String,

    /// Transmission type
    pub transmission: String,

    /// Long-form description
    pub description: Option<String>,

    /// Listing image URL
    pub image_url: Option<String>,

    /// Whether to show on the featured carousel
    pub featured: Option<bool>,

    /// Inventory status; defaults to "available"
    pub status: Option<String>,
}

/// Public view of one inventory car
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CarView {
    /// Car ID (UUID)
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: i64,
    pub year: i32,
    pub mileage: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub status: String,
    pub created_at: i64,
}

impl From<car::Model> for CarView {
    fn from(model: car::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            brand: model.brand,
            category: model.category,
            price: model.price,
            year: model.year,
            mileage: model.mileage,
            fuel_type: model.fuel_type,
            transmission: model.transmission,
            description: model.description,
            image_url: model.image_url,
            featured: model.featured,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Paginated car listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CarListResponse {
    pub cars: Vec<CarView>,

    /// Total matching cars before pagination
    pub total: u64,
}

/// API response for the public car listing
#[derive(ApiResponse)]
pub enum CarListApiResponse {
    /// Matching cars
    #[oai(status = 200)]
    Ok(Json<CarListResponse>),

    /// Listing failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for a single car lookup
#[derive(ApiResponse)]
pub enum CarDetailApiResponse {
    /// The requested car
    #[oai(status = 200)]
    Ok(Json<CarView>),

    /// No car with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Lookup failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for creating a car listing
#[derive(ApiResponse)]
pub enum CarCreateApiResponse {
    /// Car created
    #[oai(status = 200)]
    Ok(Json<CarView>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// Creation failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for updating a car listing
#[derive(ApiResponse)]
pub enum CarUpdateApiResponse {
    /// Car updated
    #[oai(status = 200)]
    Ok(Json<CarView>),

    /// Validation failed
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No car with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Update failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}

/// API response for deleting a car listing
#[derive(ApiResponse)]
pub enum CarDeleteApiResponse {
    /// Car deleted
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),

    /// Invalid or expired JWT token
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),

    /// No car with that ID
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Deletion failed
    #[oai(status = 500)]
    InternalServerError(Json<ErrorResponse>),
}
