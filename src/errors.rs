use crate::sheets::SheetError;
use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad query input, etc.) or the listing sheet fetch.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Sheet(SheetError),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Sheet(err) => write!(f, "Listing fetch failed: {err}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<SheetError> for ServerError {
    fn from(err: SheetError) -> Self {
        ServerError::Sheet(err)
    }
}
