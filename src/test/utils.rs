// Test utilities shared across unit and integration tests
// Only compiled when running tests

use std::sync::Arc;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::config::{AppSettings, LockoutPolicy, NotificationConfig};

/// In-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn test_settings() -> AppSettings {
    AppSettings {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        jwt_secret: "test-secret-key-minimum-32-characters-long".to_string(),
        access_token_ttl: Duration::from_secs(3600),
    }
}

pub fn test_notification_config() -> NotificationConfig {
    // No api_key: sends are disabled no-ops in tests
    NotificationConfig {
        api_url: "http://127.0.0.1:0/emails".to_string(),
        api_key: None,
        from_address: "test@showroom.example".to_string(),
        operator_address: None,
    }
}

/// Fully wired AppData over an in-memory database with the default lockout
/// policy and email delivery disabled.
pub async fn setup_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    AppData::build(
        db,
        &test_settings(),
        LockoutPolicy::default(),
        test_notification_config(),
    )
}

/// Register a profile and return its user id
pub async fn create_test_user(app_data: &Arc<AppData>, email: &str) -> String {
    let profile = app_data
        .profile_store
        .create_profile(email.to_string(), "correct horse battery", None, None)
        .await
        .expect("Failed to create test user");
    profile.id
}
