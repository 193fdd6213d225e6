//! # Commands Module
//!
//! Every operation the front desk screens offer, as plain functions over
//! [`HotelState`](crate::state::HotelState).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── rooms.rs    ◄─── Browse, search, quote, offers, add room
//! ├── booking.rs  ◄─── Book, cancel, reservation lists
//! ├── account.rs  ◄─── Register, sign in, profile, payment methods
//! ├── admin.rs    ◄─── Dashboard
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Shell line                                                             │
//! │  ──────────                                                             │
//! │  quote 301 2025-01-01 2025-01-08                                        │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  fn quote_stay(                                                         │
//! │      state: &HotelState,     ◄── Shared hotel                          │
//! │      room_number: u32,                                                  │
//! │      check_in: &str,                                                    │
//! │      check_out: &str,                                                   │
//! │  ) -> ApiResult<Quote>                                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  { "nights": 7, "pricePerNight": 850000, "totalPrice": 5950000 }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never check who is signed in; the shell does that before
//! dispatching.

pub mod account;
pub mod admin;
pub mod booking;
pub mod config;
pub mod rooms;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use serenity_store::{FixedClock, Hotel};

    use crate::state::HotelState;

    /// A seeded hotel whose clock reads 2024-12-20.
    pub fn state() -> HotelState {
        state_on(NaiveDate::from_ymd_opt(2024, 12, 20).unwrap())
    }

    pub fn state_on(today: NaiveDate) -> HotelState {
        HotelState::new(Hotel::seeded(FixedClock::new(today)).unwrap())
    }
}
