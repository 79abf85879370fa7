use std::error::Error;
use std::fmt;

/// Failures while pulling the listing sheet. These must stay visible
/// to the caller: a failed fetch is a failed search, never an empty
/// result table.
#[derive(Debug)]
pub enum SheetError {
    Config(String),
    Network(String),
    Auth(u16),
    SheetNotFound,
    Status(u16),
    Malformed(String),
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::Config(msg) => write!(f, "Config error: {msg}"),
            SheetError::Network(msg) => write!(f, "Network error: {msg}"),
            SheetError::Auth(status) => write!(f, "Authentication rejected (HTTP {status})"),
            SheetError::SheetNotFound => write!(f, "Listing sheet not found"),
            SheetError::Status(status) => write!(f, "Unexpected HTTP status {status}"),
            SheetError::Malformed(msg) => write!(f, "Malformed sheet payload: {msg}"),
        }
    }
}

impl Error for SheetError {}
