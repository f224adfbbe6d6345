use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Generic error body shared by all endpoints
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check body
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Package name
    pub service: String,

    /// Deployed package version
    pub version: String,

    /// Server time (RFC 3339)
    pub timestamp: String,
}

/// Generic success body for mutations that return nothing else
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Success message
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
