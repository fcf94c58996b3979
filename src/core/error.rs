//! # Application Errors
//!
//! The single "last error" value held in `App`. Errors are plain data so
//! they can travel through `Action::SetError` and be rendered by any adapter.
//!
//! Timestamps are stamped by whoever builds the error, never by `update()`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Initial catalogue load failed.
    InitError,
    /// A refresh of the catalogue failed.
    LoadError,
    /// Lookup by identifier found nothing.
    NotFound,
    /// Single-item lookup failed.
    FetchError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InitError => "INIT_ERROR",
            ErrorCode::LoadError => "LOAD_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::FetchError => "FETCH_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn not_found(id: &str) -> Self {
        Self::new(ErrorCode::NotFound, format!("Animal with id {id} not found"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_serializes_screaming() {
        assert_eq!(serde_json::to_string(&ErrorCode::InitError).unwrap(), "\"INIT_ERROR\"");
        assert_eq!(serde_json::to_string(&ErrorCode::FetchError).unwrap(), "\"FETCH_ERROR\"");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn test_display_includes_details() {
        let err = AppError::new(ErrorCode::LoadError, "Failed to load animals").with_details("timeout");
        assert_eq!(err.to_string(), "[LOAD_ERROR] Failed to load animals (timeout)");
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("42");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("42"));
        assert!(err.timestamp > 0);
    }
}
