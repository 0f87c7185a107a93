//! Error types and JSON error response formatting.

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use hyper::ext::ReasonPhrase;
use serde::Serialize;
use thiserror::Error;

/// Error codes reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Request errors
    InvalidInput,
    InvalidAyahRange,
    SurahNotFound,

    // Page map errors
    PageMapUnreadable,
    PageMapMalformed,
    InvalidPageRecord,
    DuplicatePageRecord,

    // Internal errors
    InvalidReferenceTable,
    InternalError,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "InvalidInput",
            ErrorCode::InvalidAyahRange => "InvalidAyahRange",
            ErrorCode::SurahNotFound => "SurahNotFound",
            ErrorCode::PageMapUnreadable => "PageMapUnreadable",
            ErrorCode::PageMapMalformed => "PageMapMalformed",
            ErrorCode::InvalidPageRecord => "InvalidPageRecord",
            ErrorCode::DuplicatePageRecord => "DuplicatePageRecord",
            ErrorCode::InvalidReferenceTable => "InvalidReferenceTable",
            ErrorCode::InternalError => "InternalError",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ErrorCode::InvalidInput | ErrorCode::InvalidAyahRange => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ErrorCode::SurahNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ErrorCode::PageMapUnreadable
            | ErrorCode::PageMapMalformed
            | ErrorCode::InvalidPageRecord
            | ErrorCode::DuplicatePageRecord
            | ErrorCode::InvalidReferenceTable
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "One of the request inputs is not valid.",
            ErrorCode::InvalidAyahRange => {
                "The ayah range must satisfy 1 <= start <= end <= the surah's ayah count."
            }
            ErrorCode::SurahNotFound => "The specified surah does not exist.",
            ErrorCode::PageMapUnreadable => "The page map file could not be read.",
            ErrorCode::PageMapMalformed => "The page map file is not valid JSON for the expected schema.",
            ErrorCode::InvalidPageRecord => "The page map contains a record outside the reference table.",
            ErrorCode::DuplicatePageRecord => "The page map lists the same ayah more than once.",
            ErrorCode::InvalidReferenceTable => "The surah reference table is inconsistent.",
            ErrorCode::InternalError => "The server encountered an internal error.",
        }
    }
}

/// Service error with code and message.
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct MushafError {
    pub code: ErrorCode,
    pub message: String,
}

impl MushafError {
    /// Creates a new error with the given code and default message.
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.default_message().to_string(),
            code,
        }
    }

    /// Creates a new error with a custom message.
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
}

impl IntoResponse for MushafError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            code: self.code.as_str(),
            message: &self.message,
        };

        let mut response = (status, Json(body)).into_response();
        response.headers_mut().insert(
            "x-mushaf-error-code",
            HeaderValue::from_static(self.code.as_str()),
        );

        // Put the message in the HTTP/1.1 status line so clients can see it
        if let Ok(reason) = ReasonPhrase::try_from(self.message.as_bytes()) {
            response.extensions_mut().insert(reason);
        }

        response
    }
}

impl From<serde_json::Error> for MushafError {
    fn from(err: serde_json::Error) -> Self {
        MushafError::with_message(ErrorCode::PageMapMalformed, err.to_string())
    }
}

/// Result type alias for service operations.
pub type MushafResult<T> = Result<T, MushafError>;
