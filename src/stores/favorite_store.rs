use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::{CatalogError, InternalError};
use crate::stores::is_unique_violation;
use crate::types::db::{car, favorite};

/// FavoriteStore manages per-user wishlist entries.
pub struct FavoriteStore {
    db: DatabaseConnection,
}

impl FavoriteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Add a car to the user's wishlist.
    ///
    /// Re-adding is not an error worth failing loudly over, but the store
    /// reports it so the API can answer "already exists" instead of 500.
    pub async fn add(&self, user_id: &str, car_id: &str) -> Result<(), InternalError> {
        let new_favorite = favorite::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            user_id: Set(user_id.to_owned()),
            car_id: Set(car_id.to_owned()),
            created_at: Set(Utc::now().timestamp()),
        };

        new_favorite.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                InternalError::Catalog(CatalogError::FavoriteExists(car_id.to_owned()))
            } else {
                InternalError::database("add_favorite", e)
            }
        })?;

        Ok(())
    }

    pub async fn remove(&self, user_id: &str, car_id: &str) -> Result<(), InternalError> {
        let result = favorite::Entity::delete_many()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::CarId.eq(car_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("remove_favorite", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::Catalog(CatalogError::FavoriteNotFound(
                car_id.to_owned(),
            )));
        }

        Ok(())
    }

    /// The user's wishlist resolved to car records, newest first.
    ///
    /// Cars deleted from inventory since being favorited are dropped from the
    /// result rather than surfacing as holes.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<car::Model>, InternalError> {
        let favorites = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_desc(favorite::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_favorites", e))?;

        let car_ids: Vec<String> = favorites.iter().map(|f| f.car_id.clone()).collect();
        if car_ids.is_empty() {
            return Ok(Vec::new());
        }

        let cars = car::Entity::find()
            .filter(car::Column::Id.is_in(car_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("resolve_favorite_cars", e))?;

        // Preserve wishlist order
        let mut ordered = Vec::with_capacity(cars.len());
        for id in car_ids {
            if let Some(found) = cars.iter().find(|c| c.id == id) {
                ordered.push(found.clone());
            }
        }
        Ok(ordered)
    }
}
