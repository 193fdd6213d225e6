//! # Pricing Module
//!
//! Turns a room and a date range into money.
//!
//! ## Two Entry Points, One Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Room card preview              Booking commit                          │
//! │  ─────────────────              ──────────────                          │
//! │  quote(room, in, out)           price_stay(room, stay, today)           │
//! │        │                              │                                 │
//! │        │                              ├──► quote(room, in, out)  ◄── same│
//! │        │                              │                                 │
//! │        ▼                              ├──► qualifying_offers(...)       │
//! │  Quote { nights,                      ├──► best_offer(...)              │
//! │          price_per_night,             ▼                                 │
//! │          total_price }          PriceBreakdown { base, discount, total }│
//! │                                                                         │
//! │  Offers are only applied at commit; the preview shows the base price.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calendar::{days_in_advance, nights_between, StayDates};
use crate::money::Money;
use crate::offers::{best_offer, qualifying_offers, OfferContext, OfferKind};
use crate::types::Room;
use crate::NO_OFFER;

// =============================================================================
// Quote
// =============================================================================

/// Pre-booking price preview (no offers applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: u32,
    pub price_per_night: Money,
    pub total_price: Money,
}

/// Prices a stay without any discount.
///
/// Uses [`nights_between`], so a same-day or reversed range quotes as one
/// night instead of failing. Pure function of its inputs.
pub fn quote(room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> Quote {
    let nights = nights_between(check_in, check_out);
    Quote {
        nights,
        price_per_night: room.nightly_price,
        total_price: room.nightly_price.times_nights(nights),
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Final price of a booking with the best offer applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub nights: u32,
    pub price_per_night: Money,
    /// `price_per_night × nights`
    pub base_price: Money,
    /// Every offer that qualified, in catalog order.
    pub qualifying_offers: Vec<OfferKind>,
    pub applied_offer: Option<OfferKind>,
    pub discount_percent: u8,
    /// `base_price × discount_percent / 100`
    pub discount_amount: Money,
    /// `base_price − discount_amount`
    pub total_price: Money,
}

impl PriceBreakdown {
    /// Name of the applied offer, or "None".
    pub fn applied_offer_name(&self) -> &'static str {
        self.applied_offer.map_or(NO_OFFER, |offer| offer.name())
    }
}

/// Prices a validated stay and applies the best qualifying offer.
///
/// `today` drives Early Bird eligibility; pass the clock's date at the time
/// the booking is committed.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use serenity_core::calendar::StayDates;
/// use serenity_core::pricing::price_stay;
/// use serenity_core::{Money, Room, RoomCategory};
///
/// let room = Room::new(1, "Standard", Money::from_pesos(1500), 2, RoomCategory::Standard);
/// let stay = StayDates::parse("2025-03-01", "2025-03-02").unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 2, 27).unwrap();
///
/// let price = price_stay(&room, &stay, today);
/// assert_eq!(price.total_price, Money::from_pesos(1500));
/// assert_eq!(price.applied_offer_name(), "None");
/// ```
pub fn price_stay(room: &Room, stay: &StayDates, today: NaiveDate) -> PriceBreakdown {
    let quote = quote(room, stay.check_in(), stay.check_out());

    let ctx = OfferContext {
        nights: quote.nights,
        days_in_advance: days_in_advance(stay.check_in(), today),
        category: room.category,
    };
    let qualifying = qualifying_offers(&ctx);
    let applied = best_offer(&qualifying);

    let discount_percent = applied.map_or(0, |offer| offer.discount_percent());
    let discount_amount = quote.total_price.percent(discount_percent);

    PriceBreakdown {
        nights: quote.nights,
        price_per_night: quote.price_per_night,
        base_price: quote.total_price,
        qualifying_offers: qualifying,
        applied_offer: applied,
        discount_percent,
        discount_amount,
        total_price: quote.total_price - discount_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomCategory;
    use crate::DATE_FORMAT;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn suite() -> Room {
        Room::new(301, "Presidential Suite", Money::from_pesos(8500), 6, RoomCategory::Suite)
    }

    fn standard() -> Room {
        Room::new(1, "Standard", Money::from_pesos(1500), 2, RoomCategory::Standard)
    }

    #[test]
    fn test_quote() {
        let q = quote(&suite(), date("2025-01-01"), date("2025-01-08"));
        assert_eq!(q.nights, 7);
        assert_eq!(q.price_per_night, Money::from_pesos(8500));
        assert_eq!(q.total_price, Money::from_pesos(59500));
    }

    #[test]
    fn test_quote_clamps_invalid_range_to_one_night() {
        let q = quote(&standard(), date("2025-03-05"), date("2025-03-01"));
        assert_eq!(q.nights, 1);
        assert_eq!(q.total_price, Money::from_pesos(1500));
    }

    #[test]
    fn test_suite_week_scenario() {
        let stay = StayDates::parse("2025-01-01", "2025-01-08").unwrap();
        let price = price_stay(&suite(), &stay, date("2024-12-20"));

        assert_eq!(price.nights, 7);
        assert_eq!(price.base_price, Money::from_pesos(59500));
        assert!(price.qualifying_offers.contains(&OfferKind::ExtendedStay));
        assert!(price.qualifying_offers.contains(&OfferKind::Honeymoon));
        assert_eq!(price.applied_offer, Some(OfferKind::Honeymoon));
        assert_eq!(price.applied_offer_name(), "Honeymoon Package");
        assert_eq!(price.discount_percent, 30);
        assert_eq!(price.discount_amount, Money::from_pesos(17850));
        assert_eq!(price.total_price, Money::from_pesos(41650));
    }

    #[test]
    fn test_single_night_standard_has_no_offer() {
        let stay = StayDates::parse("2025-03-01", "2025-03-02").unwrap();
        let price = price_stay(&standard(), &stay, date("2025-02-27"));

        assert!(price.qualifying_offers.is_empty());
        assert_eq!(price.applied_offer, None);
        assert_eq!(price.discount_percent, 0);
        assert!(price.discount_amount.is_zero());
        assert_eq!(price.total_price, Money::from_pesos(1500));
    }

    #[test]
    fn test_early_bird_depends_on_today() {
        let stay = StayDates::parse("2025-03-01", "2025-03-02").unwrap();

        let early = price_stay(&standard(), &stay, date("2025-01-30"));
        assert_eq!(early.applied_offer, Some(OfferKind::EarlyBird));
        assert_eq!(early.discount_amount, Money::from_pesos(225));
        assert_eq!(early.total_price, Money::from_pesos(1275));

        let late = price_stay(&standard(), &stay, date("2025-01-31"));
        assert_eq!(late.applied_offer, None);
    }

    #[test]
    fn test_totals_hold_for_every_category() {
        let stay = StayDates::parse("2025-05-01", "2025-05-04").unwrap();
        for category in RoomCategory::ALL {
            let room = Room::new(9, "Any", Money::from_centavos(333_333), 2, category);
            let price = price_stay(&room, &stay, date("2025-04-30"));
            assert_eq!(price.base_price, room.nightly_price.times_nights(price.nights));
            assert_eq!(
                price.discount_amount,
                price.base_price.percent(price.discount_percent)
            );
            assert_eq!(price.total_price, price.base_price - price.discount_amount);
        }
    }

    #[test]
    fn test_preview_matches_commit_base_price() {
        let stay = StayDates::parse("2025-01-01", "2025-01-08").unwrap();
        let preview = quote(&suite(), stay.check_in(), stay.check_out());
        let committed = price_stay(&suite(), &stay, date("2024-12-31"));
        assert_eq!(preview.total_price, committed.base_price);
        assert_eq!(preview.nights, committed.nights);
    }
}
