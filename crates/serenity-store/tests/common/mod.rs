//! Shared helpers for hotel integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use serenity_core::{BookingRequest, Registration, Role};
use serenity_store::{seed, FixedClock, Hotel};

/// Date every test hotel believes is today.
pub fn today() -> NaiveDate {
    date("2024-12-20")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

/// The default 50-room catalog plus one guest account (`guest1`).
///
/// Only one password is hashed, which keeps debug-build tests quick.
pub fn hotel() -> Hotel {
    hotel_on(today())
}

pub fn hotel_on(today: NaiveDate) -> Hotel {
    let mut hotel = Hotel::new(FixedClock::new(today));
    seed::seed_rooms(&mut hotel).expect("seed rooms");
    hotel.register(registration("guest1")).expect("register guest1");
    hotel
}

pub fn registration(username: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: format!("{}@email.com", username),
        phone: "09234567890".to_string(),
        password: "guest123".to_string(),
        confirm_password: "guest123".to_string(),
        role: Role::Guest,
    }
}

pub fn request(room_number: u32, check_in: &str, check_out: &str, guests: u32) -> BookingRequest {
    BookingRequest {
        room_number,
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        guests,
        check_in_time: None,
        check_out_time: None,
        payment_method: String::new(),
        username: "guest1".to_string(),
    }
}
