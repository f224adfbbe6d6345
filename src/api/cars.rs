use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::errors::{CatalogError, InternalError};
use crate::stores::CarFilter;
use crate::types::dto::cars::{
    CarDetailApiResponse, CarListApiResponse, CarListResponse, CarView,
};
use crate::types::dto::common::ErrorResponse;

const DEFAULT_PAGE_SIZE: u64 = 20;

/// Public car catalog API endpoints
pub struct CarsApi {
    app_data: Arc<AppData>,
}

impl CarsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for catalog endpoints
#[derive(Tags)]
enum CarsTags {
    /// Car catalog browsing
    Catalog,
}

#[OpenApi]
impl CarsApi {
    /// Browse the car inventory
    ///
    /// All filters are optional and combine with AND; `search` matches name
    /// or brand as a substring.
    #[oai(path = "/cars", method = "get", tag = "CarsTags::Catalog")]
    #[allow(clippy::too_many_arguments)]
    async fn list(
        &self,
        brand: Query<Option<String>>,
        category: Query<Option<String>>,
        status: Query<Option<String>>,
        featured: Query<Option<bool>>,
        max_price: Query<Option<i64>>,
        search: Query<Option<String>>,
        limit: Query<Option<u64>>,
        offset: Query<Option<u64>>,
    ) -> CarListApiResponse {
        let filter = CarFilter {
            brand: brand.0,
            category: category.0,
            status: status.0,
            featured: featured.0,
            max_price: max_price.0,
            search: search.0,
        };
        let limit = limit.0.unwrap_or(DEFAULT_PAGE_SIZE);
        let offset = offset.0.unwrap_or(0);

        let cars = match self.app_data.car_store.list(&filter, limit, offset).await {
            Ok(cars) => cars,
            Err(err) => {
                tracing::error!("Car listing failed: {:?}", err);
                return CarListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )));
            }
        };

        let total = match self.app_data.car_store.count(&filter).await {
            Ok(total) => total,
            Err(err) => {
                tracing::error!("Car count failed: {:?}", err);
                return CarListApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Listing failed",
                )));
            }
        };

        CarListApiResponse::Ok(Json(CarListResponse {
            cars: cars.into_iter().map(CarView::from).collect(),
            total,
        }))
    }

    /// Look up one car by ID
    #[oai(path = "/cars/:car_id", method = "get", tag = "CarsTags::Catalog")]
    async fn detail(&self, car_id: Path<String>) -> CarDetailApiResponse {
        match self.app_data.car_store.get(&car_id.0).await {
            Ok(car) => CarDetailApiResponse::Ok(Json(CarView::from(car))),
            Err(InternalError::Catalog(CatalogError::CarNotFound(_))) => {
                CarDetailApiResponse::NotFound(Json(ErrorResponse::new("Car not found")))
            }
            Err(err) => {
                tracing::error!("Car lookup failed: {:?}", err);
                CarDetailApiResponse::InternalServerError(Json(ErrorResponse::new(
                    "Lookup failed",
                )))
            }
        }
    }
}
