//! # Money Module
//!
//! Provides the `Money` type for room rates, discounts and revenue.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 15% discount on ₱3,333.33 in doubles drifts by fractions of a       │
//! │  centavo, and the dashboard revenue sum drifts with it.                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    Every amount is an i64 count of centavos (1 peso = 100 centavos)     │
//! │    Percentages round half-up to the nearest centavo, exactly once       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use serenity_core::money::Money;
//!
//! let nightly = Money::from_pesos(8500);
//! let base = nightly.times_nights(7);           // ₱59500.00
//! let discount = base.percent(30);              // ₱17850.00
//! assert_eq!((base - discount).pesos(), 41650);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

/// Currency symbol used by [`Money`]'s `Display` implementation.
pub const PESO_SIGN: &str = "₱";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos.
///
/// ## Where Money is Used
/// ```text
/// Room.nightly_price ──► Quote.total_price (× nights)
///                              │
///                              ├──► PriceBreakdown.discount_amount (× percent)
///                              │
///                              └──► Booking.total_price ──► Dashboard revenue
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole pesos. Saturates at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use serenity_core::money::Money;
    ///
    /// assert_eq!(Money::from_pesos(1500).centavos(), 150_000);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos.saturating_mul(100))
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion (truncated toward zero).
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies a nightly rate by a number of nights. Saturates at the
    /// i64 bounds.
    #[inline]
    pub const fn times_nights(&self, nights: u32) -> Self {
        Money(self.0.saturating_mul(nights as i64))
    }

    /// Returns `percent`% of this amount, rounded half-up to the centavo.
    ///
    /// ## Implementation
    /// Integer math: `(amount * percent + 50) / 100`. i128 guards the
    /// intermediate product on very large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use serenity_core::money::Money;
    ///
    /// // 15% of ₱3,333.33 = ₱499.9995 → ₱500.00
    /// let discount = Money::from_centavos(333_333).percent(15);
    /// assert_eq!(discount.centavos(), 50_000);
    /// ```
    pub fn percent(&self, percent: u8) -> Money {
        let centavos = (self.0 as i128 * percent as i128 + 50) / 100;
        Money::from_centavos(centavos as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `₱1500.00` (no digit grouping).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            PESO_SIGN,
            self.pesos().abs(),
            self.centavos_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Summing booking totals for dashboard revenue.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pesos() {
        let money = Money::from_pesos(2500);
        assert_eq!(money.centavos(), 250_000);
        assert_eq!(money.pesos(), 2500);
        assert_eq!(money.centavos_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pesos(1500).to_string(), "₱1500.00");
        assert_eq!(Money::from_centavos(1099).to_string(), "₱10.99");
        assert_eq!(Money::from_centavos(-550).to_string(), "-₱5.50");
        assert_eq!(Money::zero().to_string(), "₱0.00");
    }

    #[test]
    fn test_times_nights() {
        assert_eq!(Money::from_pesos(8500).times_nights(7), Money::from_pesos(59500));
        assert_eq!(Money::from_pesos(1500).times_nights(1), Money::from_pesos(1500));
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let max = Money::from_centavos(i64::MAX);
        assert_eq!(Money::from_centavos(i64::MAX / 2).times_nights(3), max);
        assert_eq!(Money::from_pesos(92_233_720_368_547_759), max);
        assert_eq!(max + Money::from_pesos(1), max);
        assert_eq!(max.percent(100), max);

        let total: Money = [max, max].into_iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_percent_exact() {
        let base = Money::from_pesos(59500);
        assert_eq!(base.percent(30), Money::from_pesos(17850));
        assert_eq!(base.percent(0), Money::zero());
        assert_eq!(base.percent(100), base);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 25% of 2 centavos = 0.5 → 1
        assert_eq!(Money::from_centavos(2).percent(25).centavos(), 1);
        // 20% of 2 centavos = 0.4 → 0
        assert_eq!(Money::from_centavos(2).percent(20).centavos(), 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_pesos(1500), Money::from_pesos(41650)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_pesos(43150));

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Money::from_pesos(10);
        a += Money::from_pesos(5);
        assert_eq!(a.pesos(), 15);
        a -= Money::from_pesos(20);
        assert_eq!(a.centavos(), -500);
        assert!(!a.is_positive());
    }
}
