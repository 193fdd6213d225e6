//! # Booking Commands
//!
//! Committing, cancelling and listing reservations.
//!
//! ## Reservation Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐  book_room   ┌──────────┐  cancel_booking  ┌──────────┐  │
//! │  │  Room    │─────────────►│  Active  │─────────────────►│  Gone    │  │
//! │  │ available│              │ booking  │                  │ (room    │  │
//! │  └──────────┘              └──────────┘                  │ free)    │  │
//! │       ▲                         │                        └──────────┘  │
//! │       │                   my_reservations                     │        │
//! │       │                   all_bookings                        │        │
//! │       └───────────────────────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serenity_core::{Booking, BookingConfirmation, BookingRequest, Money};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::HotelState;

/// One row of the reservations table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: u64,
    pub username: String,
    pub room_number: u32,
    #[ts(as = "String")]
    pub check_in: NaiveDate,
    #[ts(as = "String")]
    pub check_out: NaiveDate,
    /// "2:00 PM"
    pub check_in_time: String,
    pub check_out_time: String,
    pub nights: u32,
    pub guests: u32,
    pub price_per_night: Money,
    pub base_price: Money,
    pub applied_offer: String,
    pub discount_percent: u8,
    pub discount_amount: Money,
    pub total_price: Money,
    pub payment_method: String,
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        BookingDto {
            id: booking.id,
            username: booking.username.clone(),
            room_number: booking.room_number,
            check_in: booking.check_in,
            check_out: booking.check_out,
            check_in_time: booking.check_in_time.to_string(),
            check_out_time: booking.check_out_time.to_string(),
            nights: booking.nights(),
            guests: booking.guests,
            price_per_night: booking.price_per_night,
            base_price: booking.base_price(),
            applied_offer: booking.applied_offer.clone(),
            discount_percent: booking.discount_percent,
            discount_amount: booking.discount_amount,
            total_price: booking.total_price,
            payment_method: booking.payment_method.clone(),
        }
    }
}

/// Cancellation confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CancellationDto {
    pub id: u64,
    /// Room released back to the catalog.
    pub room_number: u32,
    pub total_price: Money,
}

/// Books a room: validates, prices with the best offer and locks the room.
pub fn book_room(state: &HotelState, request: BookingRequest) -> ApiResult<BookingConfirmation> {
    debug!(
        room_number = request.room_number,
        username = %request.username,
        "book_room command"
    );
    state.try_with_hotel_mut(|h| h.create_booking(request))
}

/// Cancels a booking and frees its room.
pub fn cancel_booking(state: &HotelState, id: u64) -> ApiResult<CancellationDto> {
    debug!(id, "cancel_booking command");
    let booking = state.try_with_hotel_mut(|h| h.cancel_booking(id))?;
    Ok(CancellationDto {
        id: booking.id,
        room_number: booking.room_number,
        total_price: booking.total_price,
    })
}

/// A guest's own bookings ("My Reservations").
pub fn my_reservations(state: &HotelState, username: &str) -> ApiResult<Vec<BookingDto>> {
    debug!(username, "my_reservations command");
    state.with_hotel(|h| {
        h.bookings_for(username)
            .into_iter()
            .map(BookingDto::from)
            .collect()
    })
}

/// Every active booking, by id (admin table).
pub fn all_bookings(state: &HotelState) -> ApiResult<Vec<BookingDto>> {
    debug!("all_bookings command");
    state.with_hotel(|h| h.bookings().into_iter().map(BookingDto::from).collect())
}

pub fn get_booking(state: &HotelState, id: u64) -> ApiResult<BookingDto> {
    debug!(id, "get_booking command");
    state.try_with_hotel(|h| h.booking(id).map(BookingDto::from))
}
