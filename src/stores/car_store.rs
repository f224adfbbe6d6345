use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::errors::{CatalogError, InternalError};
use crate::types::db::car;

/// Allowed inventory status values
pub const CAR_STATUSES: &[&str] = &["available", "sold", "reserved"];

/// Filters for the public car listing
#[derive(Debug, Default, Clone)]
pub struct CarFilter {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
}

/// Fields for creating or replacing a car listing
#[derive(Debug, Clone)]
pub struct CarInput {
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
}

/// CarStore manages the car inventory table.
pub struct CarStore {
    db: DatabaseConnection,
}

impl CarStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: CarInput) -> Result<car::Model, InternalError> {
        if !CAR_STATUSES.contains(&input.status.as_str()) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(
                input.status,
            )));
        }

        let now = Utc::now().timestamp();
        let new_car = car::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(input.name),
            brand: Set(input.brand),
            category: Set(input.category),
            price: Set(input.price),
            year: Set(input.year),
            mileage: Set(input.mileage),
            fuel_type: Set(input.fuel_type),
            transmission: Set(input.transmission),
            description: Set(input.description),
            image_url: Set(input.image_url),
            featured: Set(input.featured),
            status: Set(input.status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_car
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_car", e))
    }

    pub async fn get(&self, car_id: &str) -> Result<car::Model, InternalError> {
        car::Entity::find_by_id(car_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_car", e))?
            .ok_or_else(|| InternalError::Catalog(CatalogError::CarNotFound(car_id.to_owned())))
    }

    /// Full-field update; the admin form always submits the complete record.
    pub async fn update(&self, car_id: &str, input: CarInput) -> Result<car::Model, InternalError> {
        if !CAR_STATUSES.contains(&input.status.as_str()) {
            return Err(InternalError::Catalog(CatalogError::InvalidStatus(
                input.status,
            )));
        }

        let existing = self.get(car_id).await?;

        let mut model: car::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.brand = Set(input.brand);
        model.category = Set(input.category);
        model.price = Set(input.price);
        model.year = Set(input.year);
        model.mileage = Set(input.mileage);
        model.fuel_type = Set(input.fuel_type);
        model.transmission = Set(input.transmission);
        model.description = Set(input.description);
        model.image_url = Set(input.image_url);
        model.featured = Set(input.featured);
        model.status = Set(input.status);
        model.updated_at = Set(Utc::now().timestamp());

        model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_car", e))
    }

    pub async fn delete(&self, car_id: &str) -> Result<(), InternalError> {
        let result = car::Entity::delete_by_id(car_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_car", e))?;

        if result.rows_affected == 0 {
            return Err(InternalError::Catalog(CatalogError::CarNotFound(
                car_id.to_owned(),
            )));
        }

        Ok(())
    }

    pub async fn list(
        &self,
        filter: &CarFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<car::Model>, InternalError> {
        self.filtered_query(filter)
            .order_by_desc(car::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_cars", e))
    }

    pub async fn count(&self, filter: &CarFilter) -> Result<u64, InternalError> {
        self.filtered_query(filter)
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_cars", e))
    }

    fn filtered_query(&self, filter: &CarFilter) -> sea_orm::Select<car::Entity> {
        let mut query = car::Entity::find();

        if let Some(brand) = &filter.brand {
            query = query.filter(car::Column::Brand.eq(brand.clone()));
        }
        if let Some(category) = &filter.category {
            query = query.filter(car::Column::Category.eq(category.clone()));
        }
        if let Some(status) = &filter.status {
            query = query.filter(car::Column::Status.eq(status.clone()));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(car::Column::Featured.eq(featured));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(car::Column::Price.lte(max_price));
        }
        if let Some(term) = &filter.search {
            let pattern = format!("%{}%", term);
            query = query.filter(
                Condition::any()
                    .add(car::Column::Name.like(pattern.clone()))
                    .add(car::Column::Brand.like(pattern)),
            );
        }

        query
    }
}
