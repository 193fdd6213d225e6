//! # serenity-store: Hotel State for Serenity Suites
//!
//! This crate owns the rooms, bookings and accounts of one hotel and the
//! lifecycle rules that change them. Pricing and offer rules come from
//! `serenity-core`; this crate decides *when* they run and records the
//! outcome.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Serenity Suites Data Flow                           │
//! │                                                                         │
//! │  Front desk command (book_room)                                        │
//! │       │  HotelState: Arc<Mutex<Hotel>>                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  serenity-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐    │   │
//! │  │   │     Hotel     │   │  Repositories │   │   EventBus   │    │   │
//! │  │   │  (hotel.rs)   │──►│ rooms         │   │  broadcast   │    │   │
//! │  │   │  lifecycle    │   │ bookings      │   │  HotelEvent  │──► subscribers
//! │  │   │  accounts     │   │ accounts      │   └──────────────┘    │   │
//! │  │   └───────┬───────┘   └───────────────┘                        │   │
//! │  │           │ Clock (today / now)                                │   │
//! │  └───────────┼─────────────────────────────────────────────────────┘   │
//! │              ▼                                                          │
//! │  serenity-core: price_stay, offers, validation                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`hotel`] - The `Hotel` facade and booking lifecycle
//! - [`repository`] - In-memory room, booking and account collections
//! - [`events`] - `HotelEvent` and the broadcast `EventBus`
//! - [`dashboard`] - Admin aggregates
//! - [`clock`] - Injected source of today's date
//! - [`password`] - Argon2 password hashing
//! - [`seed`] - Default catalog and accounts
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use serenity_store::{FixedClock, Hotel};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
//! let mut hotel = Hotel::new(FixedClock::new(today));
//! serenity_store::seed::seed_rooms(&mut hotel).unwrap();
//!
//! assert_eq!(hotel.rooms().len(), 50);
//! assert_eq!(hotel.dashboard().occupancy_rate, 0.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod dashboard;
pub mod events;
pub mod hotel;
pub mod password;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::Dashboard;
pub use events::{EventBus, HotelEvent};
pub use hotel::Hotel;
