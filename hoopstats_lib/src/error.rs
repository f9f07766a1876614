//! Error types for the library layer.

use std::fmt;

use crate::seed::SeedDataError;
use crate::table::SchemaError;

/// Errors that stop a crawl or a load.
///
/// Fetch failures for a single school or game never surface here; they are
/// recorded in a [`crate::FailureReport`] instead.
#[derive(Debug)]
pub enum HoopsError {
    /// Reading or writing an artifact failed.
    Io(std::io::Error),
    /// CSV encoding or decoding failed.
    Csv(csv::Error),
    /// A table did not match its fixed schema.
    Schema(SchemaError),
    /// A date, time or number in persisted data did not parse.
    Parse(String),
    /// Embedded or external seed data is invalid.
    SeedData(SeedDataError),
}

impl fmt::Display for HoopsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::Schema(e) => write!(f, "Schema error: {}", e),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::SeedData(e) => write!(f, "Seed data error: {}", e),
        }
    }
}

impl std::error::Error for HoopsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Schema(e) => Some(e),
            Self::SeedData(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for HoopsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for HoopsError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<SchemaError> for HoopsError {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

impl From<SeedDataError> for HoopsError {
    fn from(e: SeedDataError) -> Self {
        Self::SeedData(e)
    }
}
