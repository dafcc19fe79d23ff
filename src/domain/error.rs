//! Agent catalog error types

use thiserror::Error;

/// Errors returned by catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No agent with the given id
    #[error("Agent not found: '{id}'")]
    NotFound { id: String },

    /// An agent with the given id already exists
    #[error("Agent already exists: '{id}'")]
    Duplicate { id: String },

    /// A configured limit would be exceeded
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
}

impl CatalogError {
    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
            Self::LimitExceeded(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
