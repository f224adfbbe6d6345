// Stores layer - Data access and repository pattern

pub mod activity_log_store;
pub mod booking_store;
pub mod car_store;
pub mod favorite_store;
pub mod inquiry_store;
pub mod login_attempt_store;
pub mod profile_store;
pub mod role_store;

pub use activity_log_store::ActivityLogStore;
pub use booking_store::{BookingInput, BookingStore, ServiceRequestInput, TradeInInput};
pub use car_store::{CarFilter, CarInput, CarStore};
pub use favorite_store::FavoriteStore;
pub use inquiry_store::InquiryStore;
pub use login_attempt_store::LoginAttemptStore;
pub use profile_store::ProfileStore;
pub use role_store::RoleStore;

/// SQLite and Postgres both surface unique-index violations with "UNIQUE" in
/// the message; SeaORM does not expose a typed variant for it.
pub(crate) fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("UNIQUE") || msg.contains("unique constraint")
}
