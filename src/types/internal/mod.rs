// Internal types - not exposed through the API surface

pub mod activity;
pub mod auth;
pub mod context;
pub mod lockout;
pub mod roles;
