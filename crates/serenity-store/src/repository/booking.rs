//! # Booking Repository
//!
//! Active bookings keyed by id, plus the id counter.
//!
//! ## Id Allocation
//! ```text
//! next_id: 1 ──► booking #1 ──► booking #2 ──► cancel #1 ──► booking #3
//!                                                  │
//!                                                  └── #1 is gone for good;
//!                                                      the counter never
//!                                                      moves backwards
//! ```

use std::collections::BTreeMap;

use serenity_core::{Booking, Money};

#[derive(Debug, Clone)]
pub struct BookingRepository {
    bookings: BTreeMap<u64, Booking>,
    next_id: u64,
}

impl BookingRepository {
    pub fn new() -> Self {
        BookingRepository {
            bookings: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Hands out the next booking id.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next booking will receive.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    pub fn insert(&mut self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }

    pub fn remove(&mut self, id: u64) -> Option<Booking> {
        self.bookings.remove(&id)
    }

    pub fn get(&self, id: u64) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    /// Every active booking, oldest first.
    pub fn all(&self) -> Vec<&Booking> {
        self.bookings.values().collect()
    }

    /// Active bookings made by one account, oldest first.
    pub fn for_user(&self, username: &str) -> Vec<&Booking> {
        self.bookings
            .values()
            .filter(|b| b.username == username)
            .collect()
    }

    /// The active booking holding a room, if any.
    pub fn for_room(&self, room_number: u32) -> Option<&Booking> {
        self.bookings.values().find(|b| b.room_number == room_number)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Sum of discounted totals over active bookings.
    pub fn total_revenue(&self) -> Money {
        self.bookings.values().map(|b| b.total_price).sum()
    }
}

impl Default for BookingRepository {
    fn default() -> Self {
        Self::new()
    }
}
