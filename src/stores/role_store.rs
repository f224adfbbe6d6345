use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::errors::{InternalError, RoleError};
use crate::stores::is_unique_violation;
use crate::types::db::user_role;
use crate::types::internal::roles::{AppRole, RoleSet};

/// RoleStore manages role-assignment rows.
///
/// Reads are always fresh queries; there is no caching layer, so a grant or
/// revocation is visible on the next resolution.
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve the set of roles currently held by a user.
    ///
    /// Zero rows yields an empty set, which callers treat as plain `user`.
    /// Rows holding role names outside the enum are skipped rather than
    /// failing the whole resolution.
    pub async fn roles_for_user(&self, user_id: &str) -> Result<RoleSet, InternalError> {
        let rows = user_role::Entity::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("roles_for_user", e))?;

        Ok(rows
            .iter()
            .filter_map(|row| AppRole::parse(&row.role))
            .collect())
    }

    /// Resolve role sets for many users in one query (admin user listing).
    ///
    /// Users with no rows are simply absent from the returned map.
    pub async fn roles_for_users(
        &self,
        user_ids: &[String],
    ) -> Result<HashMap<String, RoleSet>, InternalError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = user_role::Entity::find()
            .filter(user_role::Column::UserId.is_in(user_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("roles_for_users", e))?;

        let mut map: HashMap<String, RoleSet> = HashMap::new();
        for row in rows {
            if let Some(role) = AppRole::parse(&row.role) {
                map.entry(row.user_id).or_default().insert(role);
            }
        }
        Ok(map)
    }

    /// Insert one role-assignment row.
    ///
    /// The (user_id, role) unique index is the authority on duplicates: a
    /// concurrent add from another admin loses here and surfaces as
    /// `RoleError::AlreadyAssigned` instead of a second row.
    pub async fn add_role(&self, user_id: &str, role: AppRole) -> Result<(), InternalError> {
        let new_row = user_role::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(user_id.to_owned()),
            role: Set(role.as_str().to_owned()),
            created_at: Set(Utc::now().timestamp()),
        };

        new_row.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                InternalError::Role(RoleError::AlreadyAssigned {
                    user_id: user_id.to_owned(),
                    role,
                })
            } else {
                InternalError::database("add_role", e)
            }
        })?;

        Ok(())
    }

    /// Delete one role-assignment row. Deleting a role the user does not hold
    /// is `RoleError::NotAssigned`.
    pub async fn remove_role(&self, user_id: &str, role: AppRole) -> Result<(), InternalError> {
        let result = user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::Role.eq(role.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("remove_role", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::Role(RoleError::NotAssigned {
                user_id: user_id.to_owned(),
                role,
            }));
        }

        Ok(())
    }
}
