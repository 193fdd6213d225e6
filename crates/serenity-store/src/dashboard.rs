//! # Admin Dashboard
//!
//! Aggregates shown on the admin desk.
//!
//! ```text
//! total_bookings = active bookings
//! total_revenue  = Σ booking.total_price          (after discounts)
//! occupancy_rate = booked_rooms / total_rooms × 100   (0 with no rooms)
//! ```
//!
//! Cancelled bookings are removed from the hotel, so they count toward
//! neither bookings nor revenue.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use serenity_core::Money;

use crate::repository::{BookingRepository, RoomRepository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_bookings: usize,
    pub total_revenue: Money,
    pub total_rooms: usize,
    pub booked_rooms: usize,
    pub available_rooms: usize,
    /// Percent of rooms currently booked, 0.0 to 100.0.
    pub occupancy_rate: f64,
}

impl Dashboard {
    pub fn compute(rooms: &RoomRepository, bookings: &BookingRepository) -> Self {
        let total_rooms = rooms.len();
        let booked_rooms = rooms.booked_count();

        Dashboard {
            total_bookings: bookings.len(),
            total_revenue: bookings.total_revenue(),
            total_rooms,
            booked_rooms,
            available_rooms: total_rooms - booked_rooms,
            occupancy_rate: occupancy_rate(booked_rooms, total_rooms),
        }
    }
}

/// `booked / total × 100`, or 0 for an empty catalog.
pub fn occupancy_rate(booked: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        booked as f64 * 100.0 / total as f64
    }
}
