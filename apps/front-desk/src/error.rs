//! # API Error Type
//!
//! Unified error type for front desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Front Desk                         │
//! │                                                                         │
//! │  Shell                       Rust Backend                               │
//! │  ─────                       ────────────                               │
//! │                                                                         │
//! │  book 301 2025-01-01 2025-01-08 4                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Lock poisoned? ─── ApiError::internal ──────────┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Booking Error? ─── BookingError::RoomUnavailable ── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "CONFLICT", "message": "Room 301 is already booked" }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serenity_core::BookingError;

use crate::state::ConfigError;

/// Result type for front desk commands.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the shell prints when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Check-out date 2025-03-02 must be after check-in date 2025-03-02"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Room, booking or account not found
    NotFound,

    /// Input validation failed (dates, forms, guest counts)
    ValidationError,

    /// Request clashes with current state (room taken, duplicate number)
    Conflict,

    /// Business rule rejected the request (capacity)
    BusinessLogic,

    /// Sign-in failed or nobody is signed in
    Unauthorized,

    /// Signed-in role may not run this command
    Forbidden,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Forbidden, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts booking errors to API errors.
impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        let code = match &err {
            BookingError::MissingDates
            | BookingError::DateFormat { .. }
            | BookingError::InvalidDateRange { .. }
            | BookingError::Validation(_) => ErrorCode::ValidationError,
            BookingError::CapacityExceeded { .. } => ErrorCode::BusinessLogic,
            BookingError::RoomUnavailable(_)
            | BookingError::DuplicateRoomNumber(_)
            | BookingError::UsernameTaken(_) => ErrorCode::Conflict,
            BookingError::RoomNotFound(_)
            | BookingError::NotFound(_)
            | BookingError::UserNotFound(_) => ErrorCode::NotFound,
            BookingError::InvalidCredentials => ErrorCode::Unauthorized,
            BookingError::Internal(detail) => {
                // Log the actual error but return a generic message
                tracing::error!("Internal hotel error: {}", detail);
                return ApiError::internal("Hotel operation failed");
            }
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Why the front desk could not start or keep reading input.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not open the hotel: {0}")]
    Hotel(#[from] ApiError),

    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
}
