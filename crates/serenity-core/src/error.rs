//! # Error Types
//!
//! Domain-specific error types for serenity-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  serenity-core errors (this file)                                      │
//! │  ├── BookingError     - Every recoverable engine failure               │
//! │  └── ValidationError  - Field-level input validation failures          │
//! │                                                                         │
//! │  front-desk errors (app crate)                                         │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── ApiError         - What the screens see (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → BookingError → ApiError → Screen              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (room number, booking id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use chrono::NaiveDate;
use thiserror::Error;

// =============================================================================
// Booking Error
// =============================================================================

/// Errors returned by the reservation engine.
///
/// Every variant is a user-correctable condition: the caller renders the
/// message and the guest re-submits. Nothing here is fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Check-in or check-out was not supplied.
    #[error("Please select check-in and check-out dates")]
    MissingDates,

    /// A date string did not match `YYYY-MM-DD`.
    #[error("Invalid date '{value}'. Please use YYYY-MM-DD format")]
    DateFormat { value: String },

    /// Check-out is on or before check-in.
    ///
    /// ## User Workflow
    /// ```text
    /// Check-in: 2025-03-05, Check-out: 2025-03-05
    ///      │
    ///      ▼
    /// InvalidDateRange { check_in, check_out }
    ///      │
    ///      ▼
    /// UI shows: "Check-out date must be after check-in date"
    /// ```
    #[error("Check-out date {check_out} must be after check-in date {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// More guests than the room sleeps.
    #[error("Room {room_number} sleeps {capacity}, but {requested} guests were requested")]
    CapacityExceeded {
        room_number: u32,
        capacity: u32,
        requested: u32,
    },

    /// The room already carries an active booking.
    #[error("Room {0} is already booked")]
    RoomUnavailable(u32),

    /// No room with this number exists in the catalog.
    #[error("Room not found: {0}")]
    RoomNotFound(u32),

    /// No active booking with this id (unknown or already cancelled).
    #[error("Reservation #{0} not found")]
    NotFound(u64),

    /// Admin tried to add a room whose number is taken.
    #[error("Room number {0} already exists")]
    DuplicateRoomNumber(u32),

    /// Registration with a username that is already in use.
    #[error("Username '{0}' already exists")]
    UsernameTaken(String),

    /// The requesting account does not exist.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Username, password or role did not match.
    #[error("Invalid username, password, or user type")]
    InvalidCredentials,

    /// Field-level validation failure.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unexpected failure outside the guest's control (password hashing).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookingError {
    /// Short, stable name of the error kind (used in logs and API codes).
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::MissingDates => "missing_dates",
            BookingError::DateFormat { .. } => "date_format",
            BookingError::InvalidDateRange { .. } => "invalid_date_range",
            BookingError::CapacityExceeded { .. } => "capacity_exceeded",
            BookingError::RoomUnavailable(_) => "room_unavailable",
            BookingError::RoomNotFound(_) => "room_not_found",
            BookingError::NotFound(_) => "not_found",
            BookingError::DuplicateRoomNumber(_) => "duplicate_room_number",
            BookingError::UsernameTaken(_) => "username_taken",
            BookingError::UserNotFound(_) => "user_not_found",
            BookingError::InvalidCredentials => "invalid_credentials",
            BookingError::Validation(_) => "validation",
            BookingError::Internal(_) => "internal",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., bad email, bad time slot).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// The list to pick from is empty.
    #[error("No {field} saved")]
    NoneSaved { field: String },

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BookingError.
pub type BookingResult<T> = Result<T, BookingError>;

// =============================================================================
// Unit Tests
// =============================================================================
