use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::types::db::login_attempt;

/// Append-only store for authentication attempts.
///
/// Rows are never mutated or deleted; the lockout guard derives its state from
/// windowed aggregates over this table.
pub struct LoginAttemptStore {
    db: DatabaseConnection,
}

impl LoginAttemptStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append one attempt record. Called on every login, success or failure.
    pub async fn record(
        &self,
        email: &str,
        success: bool,
        failure_reason: Option<String>,
        user_id: Option<String>,
        user_agent: Option<String>,
    ) -> Result<(), InternalError> {
        let attempt = login_attempt::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            email: Set(email.to_owned()),
            success: Set(success),
            failure_reason: Set(failure_reason),
            user_id: Set(user_id),
            user_agent: Set(user_agent),
            created_at: Set(Utc::now().timestamp()),
        };

        attempt
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("record_login_attempt", e))?;

        Ok(())
    }

    /// Count failed attempts for an email at or after `since` (Unix seconds).
    pub async fn count_failures_since(
        &self,
        email: &str,
        since: i64,
    ) -> Result<u64, InternalError> {
        login_attempt::Entity::find()
            .filter(login_attempt::Column::Email.eq(email))
            .filter(login_attempt::Column::Success.eq(false))
            .filter(login_attempt::Column::CreatedAt.gte(since))
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_failures_since", e))
    }

    /// Count failed attempts inside the closed interval `[since, until]`.
    pub async fn count_failures_between(
        &self,
        email: &str,
        since: i64,
        until: i64,
    ) -> Result<u64, InternalError> {
        login_attempt::Entity::find()
            .filter(login_attempt::Column::Email.eq(email))
            .filter(login_attempt::Column::Success.eq(false))
            .filter(login_attempt::Column::CreatedAt.gte(since))
            .filter(login_attempt::Column::CreatedAt.lte(until))
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_failures_between", e))
    }

    /// Timestamp of the most recent failed attempt at or after `since`.
    pub async fn latest_failure_since(
        &self,
        email: &str,
        since: i64,
    ) -> Result<Option<i64>, InternalError> {
        let row = login_attempt::Entity::find()
            .filter(login_attempt::Column::Email.eq(email))
            .filter(login_attempt::Column::Success.eq(false))
            .filter(login_attempt::Column::CreatedAt.gte(since))
            .order_by_desc(login_attempt::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("latest_failure_since", e))?;

        Ok(row.map(|r| r.created_at))
    }

    /// Newest-first attempt history for the login surface display.
    pub async fn recent_attempts(
        &self,
        email: &str,
        limit: u64,
    ) -> Result<Vec<login_attempt::Model>, InternalError> {
        login_attempt::Entity::find()
            .filter(login_attempt::Column::Email.eq(email))
            .order_by_desc(login_attempt::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("recent_attempts", e))
    }
}
