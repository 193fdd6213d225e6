//! # Seed Data
//!
//! The catalog and accounts a fresh hotel opens with.
//!
//! ## Default Catalog
//! ```text
//! ┌────────────┬────────────────────┬───────────┬────────┬──────────┐
//! │  Numbers   │  Name              │ Category  │ Nightly│ Capacity │
//! ├────────────┼────────────────────┼───────────┼────────┼──────────┤
//! │    1 – 10  │ Standard           │ Standard  │ ₱1500  │    2     │
//! │  101 – 110 │ Deluxe Single      │ Deluxe    │ ₱2500  │    2     │
//! │  201 – 210 │ Executive Double   │ Executive │ ₱3500  │    2     │
//! │  301 – 310 │ Presidential Suite │ Suite     │ ₱8500  │    6     │
//! │  401 – 410 │ Family Room        │ Family    │ ₱5000  │   10     │
//! └────────────┴────────────────────┴───────────┴────────┴──────────┘
//! ```
//!
//! ## Default Accounts
//! | Username | Password | Role  |
//! |----------|----------|-------|
//! | admin    | admin123 | ADMIN |
//! | guest1   | guest123 | GUEST |
//! | staff1   | staff123 | STAFF |

use tracing::info;

use serenity_core::{BookingResult, Money, NewRoom, Registration, Role, RoomCategory};

use crate::hotel::Hotel;

/// Rooms per category in the default catalog.
pub const ROOMS_PER_CATEGORY: u32 = 10;

/// `(first room number, name, category, nightly pesos)` per block.
const ROOM_BLOCKS: [(u32, &str, RoomCategory, i64); 5] = [
    (1, "Standard", RoomCategory::Standard, 1500),
    (101, "Deluxe Single", RoomCategory::Deluxe, 2500),
    (201, "Executive Double", RoomCategory::Executive, 3500),
    (301, "Presidential Suite", RoomCategory::Suite, 8500),
    (401, "Family Room", RoomCategory::Family, 5000),
];

/// `(username, password, role, email, phone)`
const ACCOUNTS: [(&str, &str, Role, &str, &str); 3] = [
    ("admin", "admin123", Role::Admin, "admin@serenitysuites.com", "09123456789"),
    ("guest1", "guest123", Role::Guest, "guest@email.com", "09234567890"),
    ("staff1", "staff123", Role::Staff, "staff@serenitysuites.com", "09345678901"),
];

/// The 50-room default catalog, in listing order.
pub fn default_rooms() -> Vec<NewRoom> {
    ROOM_BLOCKS
        .iter()
        .flat_map(|&(first, name, category, pesos)| {
            (first..first + ROOMS_PER_CATEGORY).map(move |number| NewRoom {
                number,
                name: name.to_string(),
                category,
                nightly_price: Money::from_pesos(pesos),
                capacity: category.default_capacity(),
            })
        })
        .collect()
}

/// Sign-up forms for the default accounts.
pub fn default_accounts() -> Vec<Registration> {
    ACCOUNTS
        .iter()
        .map(|&(username, password, role, email, phone)| Registration {
            username: username.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
            role,
        })
        .collect()
}

/// Loads the default catalog into a hotel.
pub fn seed_rooms(hotel: &mut Hotel) -> BookingResult<()> {
    for room in default_rooms() {
        hotel.add_room(room)?;
    }
    info!(rooms = hotel.rooms().len(), "Seeded room catalog");
    Ok(())
}

/// Registers the default accounts.
pub fn seed_accounts(hotel: &mut Hotel) -> BookingResult<()> {
    for registration in default_accounts() {
        hotel.register(registration)?;
    }
    info!(accounts = ACCOUNTS.len(), "Seeded default accounts");
    Ok(())
}
