//! # Domain Types
//!
//! Core domain types used throughout Serenity Suites.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Room       │   │     Booking     │   │  GuestAccount   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  number (key)   │◄──│  room_number    │   │  username (key) │       │
//! │  │  category       │   │  id (counter)   │──►│  role           │       │
//! │  │  nightly_price  │   │  total_price    │   │  payment methods│       │
//! │  │  booked (lock)  │   │  applied_offer  │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  RoomCategory   │   │      Role       │                             │
//! │  │  Standard..     │   │  Admin          │                             │
//! │  │  Suite, Family  │   │  Guest, Staff   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A booking copies the room's nightly price when it is created, so a later
//! price change on the room never alters what the guest was charged.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calendar::{nights_between, TimeSlot};
use crate::error::ValidationError;
use crate::money::Money;
use crate::offers::OfferKind;
use crate::pricing::PriceBreakdown;

// =============================================================================
// Room Category
// =============================================================================

/// The five kinds of room the hotel sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Executive,
    Suite,
    Family,
}

impl RoomCategory {
    /// Every category, in catalog order.
    pub const ALL: [RoomCategory; 5] = [
        RoomCategory::Standard,
        RoomCategory::Deluxe,
        RoomCategory::Executive,
        RoomCategory::Suite,
        RoomCategory::Family,
    ];

    /// How many guests a room of this category sleeps by default.
    ///
    /// ```text
    /// Standard / Deluxe / Executive  →  2
    /// Suite                          →  6
    /// Family                         → 10
    /// ```
    pub const fn default_capacity(&self) -> u32 {
        match self {
            RoomCategory::Standard | RoomCategory::Deluxe | RoomCategory::Executive => 2,
            RoomCategory::Suite => 6,
            RoomCategory::Family => 10,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Standard => "Standard",
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Executive => "Executive",
            RoomCategory::Suite => "Suite",
            RoomCategory::Family => "Family",
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "room type".to_string(),
                allowed: RoomCategory::ALL.iter().map(|c| c.to_string()).collect(),
            })
    }
}

// =============================================================================
// Room
// =============================================================================

/// A bookable room.
///
/// ## Availability Lock
/// `booked` is the mutual-exclusion flag for the room: it is set by a
/// successful booking and cleared by that booking's cancellation. A booked
/// room always has exactly one active booking pointing at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Room number (unique, positive).
    pub number: u32,

    /// Display name ("Presidential Suite").
    pub name: String,

    pub category: RoomCategory,

    /// Price per night.
    pub nightly_price: Money,

    /// Maximum number of guests.
    pub capacity: u32,

    /// True while an active booking holds this room.
    pub booked: bool,
}

impl Room {
    /// Creates an available room.
    pub fn new(
        number: u32,
        name: impl Into<String>,
        nightly_price: Money,
        capacity: u32,
        category: RoomCategory,
    ) -> Self {
        Room {
            number,
            name: name.into(),
            category,
            nightly_price,
            capacity,
            booked: false,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        !self.booked
    }

    /// Checks whether `guests` people fit in this room.
    #[inline]
    pub fn fits(&self, guests: u32) -> bool {
        guests <= self.capacity
    }
}

/// Admin request to add a room to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub number: u32,
    pub name: String,
    pub category: RoomCategory,
    pub nightly_price: Money,
    pub capacity: u32,
}

impl From<NewRoom> for Room {
    fn from(new: NewRoom) -> Self {
        Room::new(new.number, new.name, new.nightly_price, new.capacity, new.category)
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A confirmed reservation.
///
/// ## Invariants
/// - `check_out > check_in`
/// - `guests <= capacity` of the room at creation time
/// - `total_price = price_per_night × nights − discount_amount`
///
/// Immutable once created. Cancellation removes it from the hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Booking id from a counter that is never reused.
    pub id: u64,

    /// Account that made the booking.
    pub username: String,

    /// Booked room (reference by number).
    pub room_number: u32,

    #[ts(as = "String")]
    pub check_in: NaiveDate,

    #[ts(as = "String")]
    pub check_out: NaiveDate,

    #[ts(as = "String")]
    pub check_in_time: TimeSlot,

    #[ts(as = "String")]
    pub check_out_time: TimeSlot,

    pub guests: u32,

    /// Nightly price at time of booking (frozen).
    pub price_per_night: Money,

    /// Payment label as picked by the guest ("Cash", "GCash (**** 1234)").
    pub payment_method: String,

    pub discount_amount: Money,

    pub discount_percent: u8,

    /// Name of the applied offer, or "None".
    pub applied_offer: String,

    /// Amount charged after discount.
    pub total_price: Money,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Nights booked.
    pub fn nights(&self) -> u32 {
        nights_between(self.check_in, self.check_out)
    }

    /// Price before discount.
    pub fn base_price(&self) -> Money {
        self.price_per_night.times_nights(self.nights())
    }
}

/// A booking request exactly as the booking form submits it.
///
/// Dates stay raw strings so that blank and malformed input can be reported
/// as `MissingDates` and `DateFormat` instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_number: u32,
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    /// Defaults to the first slot of the day.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub check_in_time: Option<TimeSlot>,
    /// Defaults to the last slot of the day.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub check_out_time: Option<TimeSlot>,
    /// Free-text payment label; blank means "Cash".
    #[serde(default)]
    pub payment_method: String,
    pub username: String,
}

/// What the guest sees after a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub id: u64,
    pub room_number: u32,
    pub nights: u32,
    pub base_price: Money,
    pub qualifying_offers: Vec<OfferKind>,
    /// Name of the applied offer, or "None".
    pub applied_offer: String,
    pub discount_percent: u8,
    pub discount_amount: Money,
    pub total_price: Money,
}

impl BookingConfirmation {
    pub fn new(booking: &Booking, price: &PriceBreakdown) -> Self {
        BookingConfirmation {
            id: booking.id,
            room_number: booking.room_number,
            nights: price.nights,
            base_price: price.base_price,
            qualifying_offers: price.qualifying_offers.clone(),
            applied_offer: price.applied_offer_name().to_string(),
            discount_percent: price.discount_percent,
            discount_amount: price.discount_amount,
            total_price: price.total_price,
        }
    }
}

// =============================================================================
// Accounts
// =============================================================================

/// What a signed-in account may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Guest,
    Staff,
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "GUEST" => Ok(Role::Guest),
            "STAFF" => Ok(Role::Staff),
            _ => Err(ValidationError::NotAllowed {
                field: "user type".to_string(),
                allowed: vec!["ADMIN".into(), "GUEST".into(), "STAFF".into()],
            }),
        }
    }
}

/// A payment method saved on a guest's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SavedPaymentMethod {
    /// "GCash", "PayMaya", "Credit Card", ...
    pub kind: String,
    /// Account or card number.
    pub number: String,
    /// Name on the account.
    pub account_name: String,
}

impl SavedPaymentMethod {
    /// Number with all but the last four digits hidden (`**** 1234`).
    ///
    /// Numbers of four characters or fewer are shown as-is.
    pub fn masked_number(&self) -> String {
        let chars: Vec<char> = self.number.chars().collect();
        if chars.len() > 4 {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("**** {}", tail)
        } else {
            self.number.clone()
        }
    }

    /// Label recorded on a booking paid with this method.
    pub fn label(&self) -> String {
        format!("{} ({})", self.kind, self.masked_number())
    }
}

/// A registered account. The password is stored only as an argon2 hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestAccount {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub email: String,
    pub phone: String,
    pub payment_methods: Vec<SavedPaymentMethod>,
}

/// Sign-up form contents.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Profile screen contents. A blank `new_password` keeps the current one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub new_password: String,
    #[serde(default)]
    pub confirm_password: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
