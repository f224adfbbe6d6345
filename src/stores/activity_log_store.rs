use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::errors::internal::ActivityError;
use crate::errors::InternalError;
use crate::types::db::activity_log;
use crate::types::internal::activity::{ActivityAction, ActivityEvent};

/// Repository for activity log storage.
///
/// Entries are immutable once written and never deleted by the application.
pub struct ActivityLogStore {
    db: DatabaseConnection,
}

impl ActivityLogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Write one activity event, serializing the details map to JSON text.
    pub async fn write_event(&self, event: ActivityEvent) -> Result<(), InternalError> {
        let details_json = serde_json::to_string(&event.details).map_err(|e| {
            ActivityError::WriteFailed(format!("Failed to serialize activity details: {}", e))
        })?;

        let entry = activity_log::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            actor_id: Set(event.actor_id),
            action: Set(event.action.as_str().to_owned()),
            target_user_id: Set(event.target_user_id),
            target_name: Set(event.target_name),
            details: Set(details_json),
            created_at: Set(Utc::now().timestamp()),
        };

        entry
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("write_activity_event", e))?;

        Ok(())
    }

    /// Chronological listing, newest first, with optional action filter.
    pub async fn list(
        &self,
        action: Option<ActivityAction>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<activity_log::Model>, InternalError> {
        let mut query = activity_log::Entity::find();

        if let Some(action) = action {
            query = query.filter(activity_log::Column::Action.eq(action.as_str()));
        }

        query
            .order_by_desc(activity_log::Column::CreatedAt)
            .order_by_desc(activity_log::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_activity_logs", e))
    }

    /// Total entry count for the given filter, for pagination.
    pub async fn count(&self, action: Option<ActivityAction>) -> Result<u64, InternalError> {
        let mut query = activity_log::Entity::find();

        if let Some(action) = action {
            query = query.filter(activity_log::Column::Action.eq(action.as_str()));
        }

        query
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_activity_logs", e))
    }
}
