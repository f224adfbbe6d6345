use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{AppSettings, LockoutPolicy, NotificationConfig};
use crate::services::{
    ActivityLogger, AuthService, LockoutService, NotificationService, RoleService,
};
use crate::stores::{
    ActivityLogStore, BookingStore, CarStore, FavoriteStore, InquiryStore, LoginAttemptStore,
    ProfileStore, RoleStore,
};

/// Centralized application data shared across API endpoints.
///
/// Stores and services are wired once at startup and handed to each API
/// struct as `Arc` clones.
pub struct AppData {
    pub db: DatabaseConnection,

    pub profile_store: Arc<ProfileStore>,
    pub role_store: Arc<RoleStore>,
    pub login_attempt_store: Arc<LoginAttemptStore>,
    pub activity_log_store: Arc<ActivityLogStore>,
    pub car_store: Arc<CarStore>,
    pub inquiry_store: Arc<InquiryStore>,
    pub booking_store: Arc<BookingStore>,
    pub favorite_store: Arc<FavoriteStore>,

    pub activity_logger: Arc<ActivityLogger>,
    pub role_service: Arc<RoleService>,
    pub lockout_service: Arc<LockoutService>,
    pub auth_service: Arc<AuthService>,
    pub notification_service: Arc<NotificationService>,
}

impl AppData {
    pub fn build(
        db: DatabaseConnection,
        settings: &AppSettings,
        lockout_policy: LockoutPolicy,
        notification_config: NotificationConfig,
    ) -> Arc<Self> {
        let profile_store = Arc::new(ProfileStore::new(db.clone()));
        let role_store = Arc::new(RoleStore::new(db.clone()));
        let login_attempt_store = Arc::new(LoginAttemptStore::new(db.clone()));
        let activity_log_store = Arc::new(ActivityLogStore::new(db.clone()));
        let car_store = Arc::new(CarStore::new(db.clone()));
        let inquiry_store = Arc::new(InquiryStore::new(db.clone()));
        let booking_store = Arc::new(BookingStore::new(db.clone()));
        let favorite_store = Arc::new(FavoriteStore::new(db.clone()));

        let activity_logger = Arc::new(ActivityLogger::new(activity_log_store.clone()));
        let role_service = Arc::new(RoleService::new(
            role_store.clone(),
            profile_store.clone(),
            activity_logger.clone(),
        ));
        let lockout_service = Arc::new(LockoutService::new(
            login_attempt_store.clone(),
            lockout_policy,
        ));
        let auth_service = Arc::new(AuthService::new(
            profile_store.clone(),
            lockout_service.clone(),
            settings,
        ));
        let notification_service = Arc::new(NotificationService::new(notification_config));

        Arc::new(Self {
            db,
            profile_store,
            role_store,
            login_attempt_store,
            activity_log_store,
            car_store,
            inquiry_store,
            booking_store,
            favorite_store,
            activity_logger,
            role_service,
            lockout_service,
            auth_service,
            notification_service,
        })
    }
}
