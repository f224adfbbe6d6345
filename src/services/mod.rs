// Services layer - Business logic and orchestration

pub mod activity_logger;
pub mod auth_service;
pub mod lockout_service;
pub mod notification_service;
pub mod role_service;

pub use activity_logger::ActivityLogger;
pub use auth_service::{AuthService, LoginError, LoginOutcome};
pub use lockout_service::LockoutService;
pub use notification_service::{NotificationService, TestDriveNotification};
pub use role_service::{BulkDirection, BulkOutcome, RoleService};
