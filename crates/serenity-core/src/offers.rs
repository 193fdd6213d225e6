//! # Offers Module
//!
//! The fixed catalog of promotional offers and the rule that picks one.
//!
//! ## Catalog
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Offer                 Discount   Qualifies when                     │
//! │  ─  ────────────────────  ────────   ────────────────────────────────   │
//! │  1  Weekend Getaway         20%      nights >= 2                        │
//! │  2  Early Bird Special      15%      check-in >= 30 days after today    │
//! │  3  Extended Stay           25%      nights >= 7                        │
//! │  4  Honeymoon Package       30%      room category is Suite             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection Rule
//! Every offer is evaluated. Among the qualifiers the one with the strictly
//! highest percent wins; on a tie the earlier catalog entry stays. Catalog
//! order only matters for display.
//!
//! Offers are a closed enum, so adding one forces every `match` below to
//! handle it.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::types::RoomCategory;
use crate::EARLY_BIRD_LEAD_DAYS;

// =============================================================================
// Offer Kind
// =============================================================================

/// One of the four promotional offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OfferKind {
    WeekendGetaway,
    EarlyBird,
    ExtendedStay,
    Honeymoon,
}

impl OfferKind {
    /// The catalog, in display order.
    pub const CATALOG: [OfferKind; 4] = [
        OfferKind::WeekendGetaway,
        OfferKind::EarlyBird,
        OfferKind::ExtendedStay,
        OfferKind::Honeymoon,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            OfferKind::WeekendGetaway => "Weekend Getaway",
            OfferKind::EarlyBird => "Early Bird Special",
            OfferKind::ExtendedStay => "Extended Stay",
            OfferKind::Honeymoon => "Honeymoon Package",
        }
    }

    pub const fn discount_percent(&self) -> u8 {
        match self {
            OfferKind::WeekendGetaway => 20,
            OfferKind::EarlyBird => 15,
            OfferKind::ExtendedStay => 25,
            OfferKind::Honeymoon => 30,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            OfferKind::WeekendGetaway => "Book 2 nights, get 20% discount",
            OfferKind::EarlyBird => "Book 30 days in advance",
            OfferKind::ExtendedStay => "Stay 7+ nights, save 25%",
            OfferKind::Honeymoon => "Romantic suite with extras",
        }
    }

    /// Short eligibility text shown on the offers screen.
    pub const fn criteria(&self) -> &'static str {
        match self {
            OfferKind::WeekendGetaway => "2+ nights",
            OfferKind::EarlyBird => "Book 30+ days ahead",
            OfferKind::ExtendedStay => "7+ nights",
            OfferKind::Honeymoon => "Suite only",
        }
    }

    /// Eligibility predicate.
    pub fn qualifies(&self, ctx: &OfferContext) -> bool {
        match self {
            OfferKind::WeekendGetaway => ctx.nights >= 2,
            OfferKind::EarlyBird => ctx.days_in_advance >= EARLY_BIRD_LEAD_DAYS,
            OfferKind::ExtendedStay => ctx.nights >= 7,
            OfferKind::Honeymoon => ctx.category == RoomCategory::Suite,
        }
    }

    /// Display details for this offer.
    pub fn details(&self) -> OfferDetails {
        OfferDetails {
            kind: *self,
            name: self.name().to_string(),
            discount_percent: self.discount_percent(),
            description: self.description().to_string(),
            criteria: self.criteria().to_string(),
        }
    }
}

impl std::fmt::Display for OfferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}% OFF)", self.name(), self.discount_percent())
    }
}

/// Everything the offers screen shows about one offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetails {
    pub kind: OfferKind,
    pub name: String,
    pub discount_percent: u8,
    pub description: String,
    pub criteria: String,
}

/// Details of the whole catalog, in display order.
pub fn catalog() -> Vec<OfferDetails> {
    OfferKind::CATALOG.iter().map(OfferKind::details).collect()
}

// =============================================================================
// Evaluation
// =============================================================================

/// The facts about a prospective booking that offers look at.
///
/// `days_in_advance` is computed against the clock at the moment of booking
/// and must never be stored and replayed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferContext {
    pub nights: u32,
    pub days_in_advance: i64,
    pub category: RoomCategory,
}

/// All qualifying offers, in catalog order.
pub fn qualifying_offers(ctx: &OfferContext) -> Vec<OfferKind> {
    let qualifying: Vec<OfferKind> = OfferKind::CATALOG
        .into_iter()
        .filter(|offer| offer.qualifies(ctx))
        .collect();

    debug!(
        nights = ctx.nights,
        days_in_advance = ctx.days_in_advance,
        category = %ctx.category,
        qualifying = qualifying.len(),
        "Evaluated offers"
    );

    qualifying
}

/// Picks the offer with the strictly highest percent; first seen wins ties.
pub fn best_offer(qualifying: &[OfferKind]) -> Option<OfferKind> {
    qualifying.iter().copied().fold(None, |best, offer| match best {
        Some(current) if offer.discount_percent() <= current.discount_percent() => Some(current),
        _ => Some(offer),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
