use thiserror::Error;

use crate::types::internal::roles::AppRole;

/// Internal error type for store and service operations
///
/// This is a hybrid error type that separates:
/// - Infrastructure errors (Database, Parse, Crypto) - shared by all stores
/// - Domain errors (Role, Profile, Catalog, Activity, Notification) - specific
///   to each store or service
///
/// This error type is NOT exposed via API. Endpoints translate these into
/// their own response enums with user-safe messages.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Failed to parse a value (UUID, timestamp, JSON, etc.)
    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    /// Cryptographic operation failed (hashing, verification, etc.)
    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    Role(#[from] RoleError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// Create a crypto error with context
    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Role store and role mutation errors
#[derive(Error, Debug)]
pub enum RoleError {
    /// Role row already present for this user
    #[error("User {user_id} already holds role {role}")]
    AlreadyAssigned { user_id: String, role: AppRole },

    /// No role row to remove
    #[error("User {user_id} does not hold role {role}")]
    NotAssigned { user_id: String, role: AppRole },

    /// Actors may never touch their own role rows
    #[error("Cannot modify your own roles")]
    SelfModificationDenied,

    /// Role name not part of the role enum
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Profile store errors (registration, credential checks)
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Email already registered
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Profile not found
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Email/password pair did not verify
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Catalog and customer-flow errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Car not found: {0}")]
    CarNotFound(String),

    #[error("Car already in favorites: {0}")]
    FavoriteExists(String),

    #[error("Favorite not found for car: {0}")]
    FavoriteNotFound(String),

    #[error("Inquiry not found: {0}")]
    InquiryNotFound(String),

    #[error("Contact message not found: {0}")]
    MessageNotFound(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Trade-in request not found: {0}")]
    TradeInNotFound(String),

    #[error("Service request not found: {0}")]
    ServiceRequestNotFound(String),

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),
}

/// Activity log errors (write failures are logged, never propagated to the
/// mutation they accompany)
#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Failed to write activity log: {0}")]
    WriteFailed(String),
}

/// Outbound notification errors
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Email delivery request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Email API rejected the request with status {0}")]
    Rejected(u16),
}
