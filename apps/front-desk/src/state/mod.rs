//! # State Module
//!
//! Manages front desk state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │         HotelState           │  │         HotelConfig          │    │
//! │  │                              │  │                              │    │
//! │  │  Arc<Mutex<Hotel>>           │  │  hotel_name                  │    │
//! │  │  rooms, bookings, accounts,  │  │  currency_symbol             │    │
//! │  │  event bus, clock            │  │  seed_defaults, log_filter   │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • HotelState: Protected by Arc<Mutex<T>> for exclusive access         │
//! │  • HotelConfig: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod hotel;

pub use config::{default_config_path, ConfigError, HotelConfig, CONFIG_FILE_NAME};
pub use hotel::HotelState;
