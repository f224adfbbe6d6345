use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::errors::{CatalogError, InternalError};
use crate::types::db::{service_request, test_drive_booking, trade_in_request};

pub const BOOKING_STATUSES: &[&str] = &["pending", "confirmed", "completed", "cancelled"];
pub const TRADE_IN_STATUSES: &[&str] = &["pending", "reviewed", "offered", "declined"];
pub const SERVICE_STATUSES: &[&str] = &["pending", "confirmed", "completed", "cancelled"];

/// Fields for a new test-drive booking
#[derive(Debug, Clone)]
pub struct BookingInput {
    pub user_id: Option<String>,
    pub car_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: Option<String>,
}

/// Fields for a new trade-in request
#[derive(Debug, Clone)]
pub struct TradeInInput {
    pub user_id: Option<String>,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub mileage: i32,
    pub condition: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
}

/// Fields for a new workshop service request
#[derive(Debug, Clone)]
pub struct ServiceRequestInput {
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Requested service (maintenance, diagnostics, detailing, ...)
    pub service_type: String,

    pub vehicle_details: Option<String>,
    pub preferred_date: Option<String>,
    pub notes: Option<String>,
}

/// BookingStore manages test-drive bookings, trade-in requests, and workshop
/// service requests.
pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_booking(
        &self,
        input: BookingInput,
    ) -> Result<test_drive_booking::Model, InternalError> {
        let new_booking = test_drive_booking::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(input.user_id),
            car_name: Set(input.car_name),
            customer_name: Set(input.customer_name),
            customer_email: Set(input.customer_email),
            customer_phone: Set(input.customer_phone),
            preferred_date: Set(input.preferred_date),
            preferred_time: Set(input.preferred_time),
            status: Set("pending".to_owned()),
            notes: Set(input.notes),
            created_at: Set(Utc::now().timestamp()),
        };

        new_booking
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_booking", e))
    }

    /// Bookings for one authenticated user ("my bookings"), newest first.
    pub async fn bookings_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<test_drive_booking::Model>, InternalError> {
        test_drive_booking::Entity::find()
            .filter(test_drive_booking::Column::UserId.eq(user_id))
            .order_by_desc(test_drive_booking::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("bookings_for_user", e))
    }

    pub async fn list_bookings(
        &self,
        status: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<test_drive_booking::Model>, InternalError> {
        let mut query = test_drive_booking::Entity::find();

        if let Some(status) = status {
            query = query.filter(test_drive_booking::Column::Status.eq(status));
        }

        query
            .order_by_desc(test_drive_booking::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_bookings", e))
    }

    pub async fn set_booking_status(
        &self,
        booking_id: &str,
        status: &str,
    ) -> Result<test_drive_booking::Model, InternalError> {
        if !BOOKING_STATUSES.contains(&status) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(
                status.to_owned(),
            )));
        }

        let existing = test_drive_booking::Entity::find_by_id(booking_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_booking", e))?
            .ok_or_else(|| {
                InternalError::Catalog(CatalogError::BookingNotFound(booking_id.to_owned()))
            })?;

        let mut model: test_drive_booking::ActiveModel = existing.into();
        model.status = Set(status.to_owned());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("set_booking_status", e))
    }

    pub async fn create_trade_in(
        &self,
        input: TradeInInput,
    ) -> Result<trade_in_request::Model, InternalError> {
        let new_request = trade_in_request::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(input.user_id),
            vehicle_make: Set(input.vehicle_make),
            vehicle_model: Set(input.vehicle_model),
            vehicle_year: Set(input.vehicle_year),
            mileage: Set(input.mileage),
            condition: Set(input.condition),
            customer_name: Set(input.customer_name),
            customer_email: Set(input.customer_email),
            customer_phone: Set(input.customer_phone),
            status: Set("pending".to_owned()),
            created_at: Set(Utc::now().timestamp()),
        };

        new_request
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_trade_in", e))
    }

    pub async fn list_trade_ins(
        &self,
        status: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<trade_in_request::Model>, InternalError> {
        let mut query = trade_in_request::Entity::find();

        if let Some(status) = status {
            query = query.filter(trade_in_request::Column::Status.eq(status));
        }

        query
            .order_by_desc(trade_in_request::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_trade_ins", e))
    }

    pub async fn set_trade_in_status(
        &self,
        request_id: &str,
        status: &str,
    ) -> Result<trade_in_request::Model, InternalError> {
        if !TRADE_IN_STATUSES.contains(&status) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(
                status.to_owned(),
            )));
        }

        let existing = trade_in_request::Entity::find_by_id(request_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_trade_in", e))?
            .ok_or_else(|| {
                InternalError::Catalog(CatalogError::TradeInNotFound(request_id.to_owned()))
            })?;

        let mut model: trade_in_request::ActiveModel = existing.into();
        model.status = Set(status.to_owned());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("set_trade_in_status", e))
    }

    pub async fn create_service_request(
        &self,
        input: ServiceRequestInput,
    ) -> Result<service_request::Model, InternalError> {
        let new_request = service_request::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(input.user_id),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            service_type: Set(input.service_type),
            vehicle_details: Set(input.vehicle_details),
            preferred_date: Set(input.preferred_date),
            notes: Set(input.notes),
            status: Set("pending".to_owned()),
            created_at: Set(Utc::now().timestamp()),
        };

        new_request
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_service_request", e))
    }

    pub async fn list_service_requests(
        &self,
        status: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<service_request::Model>, InternalError> {
        let mut query = service_request::Entity::find();

        if let Some(status) = status {
            query = query.filter(service_request::Column::Status.eq(status));
        }

        query
            .order_by_desc(service_request::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_service_requests", e))
    }

    pub async fn set_service_request_status(
        &self,
        request_id: &str,
        status: &str,
    ) -> Result<service_request::Model, InternalError> {
        if !SERVICE_STATUSES.contains(&status) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(
                status.to_owned(),
            )));
        }

        let existing = service_request::Entity::find_by_id(request_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_service_request", e))?
            .ok_or_else(|| {
                InternalError::Catalog(CatalogError::ServiceRequestNotFound(
                    request_id.to_owned(),
                ))
            })?;

        let mut model: service_request::ActiveModel = existing.into();
        model.status = Set(status.to_owned());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("set_service_request_status", e))
    }
}
