// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from the server logic
/// (routing, bad input, startup configuration).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
