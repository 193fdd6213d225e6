//! # Repository Module
//!
//! In-memory collections behind the [`Hotel`](crate::Hotel).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Hotel (lifecycle rules, events, logging)                              │
//! │       │                                                                 │
//! │       ├──► RoomRepository      Vec<Room>, catalog order                │
//! │       │    ├── insert (unique number)                                  │
//! │       │    ├── get / get_mut                                           │
//! │       │    └── available(category)                                     │
//! │       │                                                                 │
//! │       ├──► BookingRepository   BTreeMap<id, Booking>, id order          │
//! │       │    ├── next_id (monotonic, never reused)                       │
//! │       │    ├── insert / remove                                         │
//! │       │    └── for_user / total_revenue                                │
//! │       │                                                                 │
//! │       └──► AccountRepository   HashMap<username, GuestAccount>         │
//! │            ├── insert (unique username)                                │
//! │            └── get / get_mut                                           │
//! │                                                                         │
//! │  Repositories enforce only key uniqueness. Cross-collection rules      │
//! │  (room.booked ⇔ active booking) live in the Hotel.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RoomRepository`] - Room catalog and availability queries
//! - [`BookingRepository`] - Active bookings and the id counter
//! - [`AccountRepository`] - Guest accounts and saved payment methods

pub mod account;
pub mod booking;
pub mod room;

pub use account::AccountRepository;
pub use booking::BookingRepository;
pub use room::RoomRepository;
