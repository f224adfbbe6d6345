use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::errors::{CatalogError, InternalError};
use crate::types::db::{contact_message, inquiry};

pub const INQUIRY_KINDS: &[&str] = &["test_drive", "trade_in", "purchase", "general"];
pub const INQUIRY_STATUSES: &[&str] = &["new", "in_progress", "resolved", "closed"];
pub const MESSAGE_STATUSES: &[&str] = &["unread", "read", "replied"];

/// InquiryStore manages customer inquiries and contact messages.
///
/// Triage is a plain status-column update with no side effects.
pub struct InquiryStore {
    db: DatabaseConnection,
}

impl InquiryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_inquiry(
        &self,
        car_id: Option<String>,
        customer_name: String,
        customer_email: String,
        customer_phone: Option<String>,
        message: String,
        kind: String,
    ) -> Result<inquiry::Model, InternalError> {
        if !INQUIRY_KINDS.contains(&kind.as_str()) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(kind)));
        }

        let now = Utc::now().timestamp();
        let new_inquiry = inquiry::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            car_id: Set(car_id),
            customer_name: Set(customer_name),
            customer_email: Set(customer_email),
            customer_phone: Set(customer_phone),
            message: Set(message),
            kind: Set(kind),
            status: Set("new".to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_inquiry
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_inquiry", e))
    }

    pub async fn list_inquiries(
        &self,
        status: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<inquiry::Model>, InternalError> {
        let mut query = inquiry::Entity::find();

        if let Some(status) = status {
            query = query.filter(inquiry::Column::Status.eq(status));
        }

        query
            .order_by_desc(inquiry::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_inquiries", e))
    }

    pub async fn set_inquiry_status(
        &self,
        inquiry_id: &str,
        status: &str,
    ) -> Result<inquiry::Model, InternalError> {
        if !INQUIRY_STATUSES.contains(&status) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(
                status.to_owned(),
            )));
        }

        let existing = inquiry::Entity::find_by_id(inquiry_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_inquiry", e))?
            .ok_or_else(|| {
                InternalError::Catalog(CatalogError::InquiryNotFound(inquiry_id.to_owned()))
            })?;

        let mut model: inquiry::ActiveModel = existing.into();
        model.status = Set(status.to_owned());
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("set_inquiry_status", e))
    }

    pub async fn create_message(
        &self,
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<contact_message::Model, InternalError> {
        let new_message = contact_message::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name),
            email: Set(email),
            subject: Set(subject),
            message: Set(message),
            status: Set("unread".to_owned()),
            created_at: Set(Utc::now().timestamp()),
        };

        new_message
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_contact_message", e))
    }

    pub async fn list_messages(
        &self,
        status: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<contact_message::Model>, InternalError> {
        let mut query = contact_message::Entity::find();

        if let Some(status) = status {
            query = query.filter(contact_message::Column::Status.eq(status));
        }

        query
            .order_by_desc(contact_message::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_contact_messages", e))
    }

    pub async fn set_message_status(
        &self,
        message_id: &str,
        status: &str,
    ) -> Result<contact_message::Model, InternalError> {
        if !MESSAGE_STATUSES.contains(&status) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(
                status.to_owned(),
            )));
        }

        let existing = contact_message::Entity::find_by_id(message_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_contact_message", e))?
            .ok_or_else(|| {
                InternalError::Catalog(CatalogError::MessageNotFound(message_id.to_owned()))
            })?;

        let mut model: contact_message::ActiveModel = existing.into();
        model.status = Set(status.to_owned());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("set_message_status", e))
    }
}
