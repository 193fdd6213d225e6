//! # Hotel State
//!
//! The single shared `Hotel`, wrapped for use from the shell and tasks.
//!
//! The hotel is wrapped in `Arc<Mutex<T>>` because:
//! - `Arc`: the shell loop and spawned tasks share one hotel
//! - `Mutex`: a booking's availability check and its `booked = true` write
//!   must happen under one exclusive lock
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Race (room 310)                              │
//! │                                                                         │
//! │  Desk A: book 310 ──┐                        ┌── Ok(confirmation #1)    │
//! │                     ├──► lock ─► check ─► set ┤                          │
//! │  Desk B: book 310 ──┘   (waits)              └── RoomUnavailable(310)   │
//! │                                                                         │
//! │  NOTE: Reads also take the lock, but release it quickly.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use serenity_core::BookingResult;
use serenity_store::{Hotel, HotelEvent, SystemClock};
use tokio::sync::broadcast;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::HotelConfig;

/// Thread-safe hotel state.
#[derive(Debug, Clone)]
pub struct HotelState {
    hotel: Arc<Mutex<Hotel>>,
}

impl HotelState {
    /// Wraps an existing hotel.
    pub fn new(hotel: Hotel) -> Self {
        HotelState {
            hotel: Arc::new(Mutex::new(hotel)),
        }
    }

    /// Opens the hotel described by the config on the system clock.
    pub fn from_config(config: &HotelConfig) -> ApiResult<Self> {
        let hotel = if config.seed_defaults {
            Hotel::seeded(SystemClock)?
        } else {
            Hotel::new(SystemClock)
        };
        info!(
            hotel = %config.hotel_name,
            rooms = hotel.rooms().len(),
            "Hotel opened"
        );
        Ok(HotelState::new(hotel))
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, Hotel>> {
        self.hotel
            .lock()
            .map_err(|_| ApiError::internal("Hotel state lock poisoned"))
    }

    /// Executes a function with read access to the hotel.
    pub fn with_hotel<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&Hotel) -> R,
    {
        let hotel = self.lock()?;
        Ok(f(&hotel))
    }

    /// Executes a function with write access to the hotel.
    pub fn with_hotel_mut<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&mut Hotel) -> R,
    {
        let mut hotel = self.lock()?;
        Ok(f(&mut hotel))
    }

    /// Like [`with_hotel`](Self::with_hotel) for fallible reads.
    pub fn try_with_hotel<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&Hotel) -> BookingResult<R>,
    {
        let hotel = self.lock()?;
        Ok(f(&hotel)?)
    }

    /// Like [`with_hotel_mut`](Self::with_hotel_mut) for fallible writes.
    ///
    /// The whole closure runs under the lock, so a check followed by a write
    /// inside it is atomic with respect to other callers.
    pub fn try_with_hotel_mut<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&mut Hotel) -> BookingResult<R>,
    {
        let mut hotel = self.lock()?;
        Ok(f(&mut hotel)?)
    }

    /// Subscribes to hotel events.
    pub fn subscribe(&self) -> ApiResult<broadcast::Receiver<HotelEvent>> {
        self.with_hotel(Hotel::subscribe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serenity_core::{BookingError, BookingRequest};
    use serenity_store::FixedClock;
    use std::thread;

    fn state() -> HotelState {
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        HotelState::new(Hotel::seeded(FixedClock::new(today)).unwrap())
    }

    fn request(room_number: u32) -> BookingRequest {
        BookingRequest {
            room_number,
            check_in: "2025-07-01".to_string(),
            check_out: "2025-07-04".to_string(),
            guests: 2,
            check_in_time: None,
            check_out_time: None,
            payment_method: String::new(),
            username: "guest1".to_string(),
        }
    }

    #[test]
    fn test_from_config_respects_seed_flag() {
        let empty = HotelState::from_config(&HotelConfig {
            seed_defaults: false,
            ..HotelConfig::default()
        })
        .unwrap();
        assert_eq!(empty.with_hotel(|h| h.rooms().len()).unwrap(), 0);

        let seeded = HotelState::from_config(&HotelConfig::default()).unwrap();
        assert_eq!(seeded.with_hotel(|h| h.rooms().len()).unwrap(), 50);
    }

    #[test]
    fn test_booking_errors_pass_through() {
        let state = state();
        let err = state
            .try_with_hotel_mut(|h| h.create_booking(request(999)))
            .unwrap_err();
        assert_eq!(err, ApiError::from(BookingError::RoomNotFound(999)));
    }

    #[test]
    fn test_clones_share_one_hotel() {
        let state = state();
        let other = state.clone();

        state
            .try_with_hotel_mut(|h| h.create_booking(request(305)))
            .unwrap();
        assert!(other.try_with_hotel(|h| h.room(305).map(|r| r.booked)).unwrap());
    }

    #[test]
    fn test_racing_desks_get_one_booking() {
        let state = state();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || state.try_with_hotel_mut(|h| h.create_booking(request(310))))
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(state.with_hotel(|h| h.bookings().len()).unwrap(), 1);
    }
}
