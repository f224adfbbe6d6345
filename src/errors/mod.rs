// Errors layer - Error type definitions

pub mod internal;

pub use internal::{
    ActivityError, CatalogError, InternalError, NotificationError, ProfileError, RoleError,
};
