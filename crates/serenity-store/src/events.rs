//! # Hotel Events
//!
//! Change notifications for anything that displays hotel state.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Hotel::create_booking ──┐                                              │
//! │  Hotel::cancel_booking ──┼──► EventBus::publish ──► broadcast::Sender   │
//! │  Hotel::add_room ────────┘         (never blocks)          │            │
//! │                                                            │            │
//! │                  ┌─────────────────────┬───────────────────┤            │
//! │                  ▼                     ▼                   ▼            │
//! │           Rooms screen          Reservations        Admin dashboard     │
//! │           (Receiver)            (Receiver)          (Receiver)          │
//! │                                                                         │
//! │  No subscribers: the event is dropped.                                 │
//! │  Slow subscriber: it sees RecvError::Lagged and refreshes in full.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tokio::sync::broadcast;
use ts_rs::TS;

use serenity_core::{Booking, Room};

/// Events kept per subscriber before the oldest are dropped.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Something changed in the hotel.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HotelEvent {
    BookingCreated { booking: Booking },
    BookingCancelled { booking: Booking },
    RoomAvailabilityChanged {
        #[serde(rename = "roomNumber")]
        room_number: u32,
        available: bool,
    },
    RoomAdded { room: Room },
}

impl HotelEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            HotelEvent::BookingCreated { .. } => "booking_created",
            HotelEvent::BookingCancelled { .. } => "booking_cancelled",
            HotelEvent::RoomAvailabilityChanged { .. } => "room_availability_changed",
            HotelEvent::RoomAdded { .. } => "room_added",
        }
    }
}

/// Publishing side of the hotel event channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<HotelEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        EventBus { tx }
    }

    /// Sends an event to every current subscriber.
    pub fn publish(&self, event: HotelEvent) {
        // Err only means nobody is listening.
        let _ = self.tx.send(event);
    }

    /// New receiver that sees every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<HotelEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
