//! # serenity-core: Pure Business Logic for Serenity Suites
//!
//! This crate is the **heart** of the reservation engine. It contains the
//! stay arithmetic, offer rules and pricing as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Serenity Suites Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front Desk (screens / shell)                 │   │
//! │  │    Browse Rooms ──► Book ──► My Reservations ──► Admin Desk     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               serenity-store (Hotel, lifecycle)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ serenity-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ calendar  │  │  offers   │  │  pricing  │  │ validation│  │   │
//! │  │   │ nights    │  │ OfferKind │  │  Quote    │  │   rules   │  │   │
//! │  │   │ TimeSlot  │  │ best pick │  │ Breakdown │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO SHARED STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Room, Booking, accounts)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`calendar`] - Date parsing, nights between dates, time-of-day slots
//! - [`offers`] - The closed promotional offer catalog
//! - [`pricing`] - Quotes and discounted totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serenity_core::calendar::StayDates;
//! use serenity_core::pricing::price_stay;
//! use serenity_core::{Money, Room, RoomCategory};
//!
//! let suite = Room::new(301, "Presidential Suite", Money::from_pesos(8500), 6, RoomCategory::Suite);
//! let stay = StayDates::parse("2025-01-01", "2025-01-08").unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
//!
//! let breakdown = price_stay(&suite, &stay, today);
//! assert_eq!(breakdown.discount_percent, 30);
//! assert_eq!(breakdown.total_price, Money::from_pesos(41650));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calendar;
pub mod error;
pub mod money;
pub mod offers;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calendar::{StayDates, TimeSlot};
pub use error::{BookingError, BookingResult, ValidationError};
pub use money::Money;
pub use offers::{OfferDetails, OfferKind};
pub use pricing::{PriceBreakdown, Quote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The one accepted date format for stays (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Label recorded on a booking when no offer qualified.
pub const NO_OFFER: &str = "None";

/// Payment label used when the guest did not pick one.
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash";

/// Highest nightly rate a room can be listed at (₱10,000,000).
pub const MAX_NIGHTLY_PRICE: Money = Money::from_pesos(10_000_000);

/// Largest capacity a room can be configured with (Family rooms sleep 10).
pub const MAX_ROOM_CAPACITY: u32 = 10;

/// Days a check-in must lie ahead of today for the Early Bird Special.
pub const EARLY_BIRD_LEAD_DAYS: i64 = 30;
