// Database entities - SeaORM models
pub mod activity_log;
pub mod car;
pub mod contact_message;
pub mod favorite;
pub mod inquiry;
pub mod login_attempt;
pub mod profile;
pub mod service_request;
pub mod test_drive_booking;
pub mod trade_in_request;
pub mod user_role;
