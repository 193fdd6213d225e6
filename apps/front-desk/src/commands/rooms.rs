//! # Room Commands
//!
//! Browsing the catalog, previewing prices and adding rooms.
//!
//! ## Booking Screen Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search Suite ──► pick 301 ──► quote 301 <in> <out> ──► book (booking.rs)│
//! │                                                                         │
//! │  The quote shows nights × nightly price only. Offers are applied when   │
//! │  the booking is committed.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serenity_core::pricing::Quote;
use serenity_core::{Money, NewRoom, OfferDetails, Room, RoomCategory};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::HotelState;

/// Room as shown in the catalog table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub number: u32,
    pub name: String,
    pub category: RoomCategory,
    pub nightly_price: Money,
    pub capacity: u32,
    pub available: bool,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        RoomDto {
            number: room.number,
            name: room.name.clone(),
            category: room.category,
            nightly_price: room.nightly_price,
            capacity: room.capacity,
            available: room.is_available(),
        }
    }
}

/// All rooms in catalog order, booked ones included.
pub fn list_rooms(state: &HotelState) -> ApiResult<Vec<RoomDto>> {
    debug!("list_rooms command");
    state.with_hotel(|h| h.rooms().iter().map(RoomDto::from).collect())
}

/// Available rooms, optionally of one category.
pub fn search_rooms(
    state: &HotelState,
    category: Option<RoomCategory>,
) -> ApiResult<Vec<RoomDto>> {
    debug!(?category, "search_rooms command");
    state.with_hotel(|h| {
        h.available_rooms(category)
            .into_iter()
            .map(RoomDto::from)
            .collect()
    })
}

/// Price preview for a stay (no offers).
pub fn quote_stay(
    state: &HotelState,
    room_number: u32,
    check_in: &str,
    check_out: &str,
) -> ApiResult<Quote> {
    debug!(room_number, check_in, check_out, "quote_stay command");
    state.try_with_hotel(|h| h.quote(room_number, check_in, check_out))
}

/// Adds a room to the catalog (admin desk).
pub fn add_room(state: &HotelState, room: NewRoom) -> ApiResult<RoomDto> {
    debug!(number = room.number, "add_room command");
    state.try_with_hotel_mut(|h| h.add_room(room).map(|r| RoomDto::from(&r)))
}

/// The offer catalog for the offers screen.
pub fn list_offers(state: &HotelState) -> ApiResult<Vec<OfferDetails>> {
    debug!("list_offers command");
    state.with_hotel(|h| h.offers())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state;
    use crate::error::ErrorCode;
    use serenity_core::OfferKind;

    #[test]
    fn test_list_rooms_in_catalog_order() {
        let rooms = list_rooms(&state()).unwrap();
        assert_eq!(rooms.len(), 50);
        assert_eq!(rooms[0].number, 1);
        assert_eq!(rooms[10].number, 101);
        assert!(rooms.iter().all(|r| r.available));
    }

    #[test]
    fn test_search_by_category() {
        let suites = search_rooms(&state(), Some(RoomCategory::Suite)).unwrap();
        assert_eq!(suites.len(), 10);
        assert!(suites.iter().all(|r| r.category == RoomCategory::Suite));
        assert!(suites.iter().all(|r| r.capacity == 6));

        assert_eq!(search_rooms(&state(), None).unwrap().len(), 50);
    }

    #[test]
    fn test_quote_has_no_discount() {
        let quote = quote_stay(&state(), 301, "2025-01-01", "2025-01-08").unwrap();
        assert_eq!(quote.nights, 7);
        assert_eq!(quote.price_per_night, Money::from_pesos(8500));
        assert_eq!(quote.total_price, Money::from_pesos(59500));
    }

    #[test]
    fn test_quote_clamps_same_day_to_one_night() {
        let quote = quote_stay(&state(), 1, "2025-03-01", "2025-03-01").unwrap();
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total_price, Money::from_pesos(1500));
    }

    #[test]
    fn test_quote_errors() {
        let state = state();
        assert_eq!(
            quote_stay(&state, 999, "2025-03-01", "2025-03-02").unwrap_err().code,
            ErrorCode::NotFound
        );
        assert_eq!(
            quote_stay(&state, 1, "", "2025-03-02").unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_add_room_shows_in_catalog() {
        let state = state();
        let added = add_room(
            &state,
            NewRoom {
                number: 501,
                name: "  Garden View ".to_string(),
                category: RoomCategory::Deluxe,
                nightly_price: Money::from_pesos(2800),
                capacity: 3,
            },
        )
        .unwrap();
        assert_eq!(added.name, "Garden View");
        assert!(added.available);

        let rooms = list_rooms(&state).unwrap();
        assert_eq!(rooms.last().unwrap().number, 501);
    }

    #[test]
    fn test_add_duplicate_room_is_conflict() {
        let err = add_room(
            &state(),
            NewRoom {
                number: 1,
                name: "Standard".to_string(),
                category: RoomCategory::Standard,
                nightly_price: Money::from_pesos(1500),
                capacity: 2,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[test]
    fn test_list_offers() {
        let offers = list_offers(&state()).unwrap();
        let kinds: Vec<OfferKind> = offers.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, OfferKind::CATALOG.to_vec());
    }
}
