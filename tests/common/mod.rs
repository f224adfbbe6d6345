// Shared setup for integration tests

use std::sync::Arc;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use showroom_backend::app_data::AppData;
use showroom_backend::config::{AppSettings, LockoutPolicy, NotificationConfig};

pub fn settings() -> AppSettings {
    AppSettings {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        jwt_secret: "integration-test-secret-at-least-32-chars".to_string(),
        access_token_ttl: Duration::from_secs(3600),
    }
}

/// Fully wired application over an in-memory database, with the given
/// lockout policy and email delivery disabled.
pub async fn setup_with_policy(policy: LockoutPolicy) -> Arc<AppData> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let notification_config = NotificationConfig {
        api_url: "http://127.0.0.1:0/emails".to_string(),
        api_key: None,
        from_address: "test@showroom.example".to_string(),
        operator_address: None,
    };

    AppData::build(db, &settings(), policy, notification_config)
}

pub async fn setup() -> Arc<AppData> {
    setup_with_policy(LockoutPolicy::default()).await
}

/// Register an account and return its user ID
pub async fn register_user(app_data: &Arc<AppData>, email: &str, password: &str) -> String {
    app_data
        .auth_service
        .register(email.to_string(), password, None, None)
        .await
        .expect("Registration failed")
        .id
}
