use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::Database;

use showroom_backend::api::{AdminApi, AuthApi, CarsApi, CustomerApi, HealthApi};
use showroom_backend::app_data::AppData;
use showroom_backend::config::{self, AppSettings, LockoutPolicy, NotificationConfig};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    config::init_logging().expect("Failed to initialize logging");

    let settings = AppSettings::from_env().expect("Invalid configuration");
    let lockout_policy = LockoutPolicy::from_env();
    let notification_config = NotificationConfig::from_env();

    let db = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database: {}", settings.database_url);

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Database migrations completed");

    let app_data = AppData::build(db, &settings, lockout_policy, notification_config);

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(app_data.clone()),
            CarsApi::new(app_data.clone()),
            CustomerApi::new(app_data.clone()),
            AdminApi::new(app_data.clone()),
        ),
        "Showroom Backend",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}/api", settings.bind_address));

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.bind_address);
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(&settings.bind_address))
        .run(app)
        .await
}
