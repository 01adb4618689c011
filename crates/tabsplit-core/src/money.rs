//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Splitting naively:                                                     │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Apportionment                            │
//! │    1000 cents across 3 people = [334, 333, 333]                        │
//! │    The leftover cent is handed out explicitly (see `apportion`)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tabsplit_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price.saturating_mul_quantity(2); // $21.98
//! let total = price + Money::from_cents(500);     // $15.99
//! assert_eq!(doubled.cents(), 2198);
//! assert_eq!(total.cents(), 1599);
//!
//! // Parsing user input happens once, at the boundary
//! let typed = Money::parse_dollars("12.10").unwrap();
//! assert_eq!(typed.cents(), 1210);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Currency symbol used by the `Display` impl.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: The engine only produces non-negative amounts, but
///   signed arithmetic keeps subtraction (surplus, residuals) total
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serializes as a bare integer
/// - **Saturating**: `+`, `+=`, `-` and `Sum` clamp at the i64 bounds, so
///   engine sums never panic or wrap to a negative total
/// - **TypeScript**: exported as `number`, matching the JSON wire form
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Item.price_cents × quantity ──► apportion ──► PersonResult.food_cents  │
/// │                                                                         │
/// │  ChargePolicy.amount_cents ──► equal / proportional ──► tip, tax        │
/// │                                                                         │
/// │  food + tip + tax ──► exact_total ──► rounded_total ──► surplus        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a unit price by a quantity, clamping at the i64 bounds.
    ///
    /// Used for line totals inside the engine, which must never panic.
    #[inline]
    pub const fn saturating_mul_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Renders the amount as a plain decimal string without a symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1250).to_decimal_string(), "12.50");
    /// assert_eq!(Money::from_cents(7).to_decimal_string(), "0.07");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Renders the amount with the given currency symbol, e.g. `"€12.50"`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Parses a dollar amount typed by a user into cents.
    ///
    /// ## Rules
    /// - Leading/trailing whitespace is ignored
    /// - A leading `-` is rejected (amounts are never negative)
    /// - Every character other than digits and `.` is dropped
    ///   (`"$1,234.50"` reads as `1234.50`)
    /// - Only the first `.` counts; later dots are dropped
    /// - Digits past the second decimal place round half-up on the third
    ///
    /// Parsing is pure integer arithmetic; no float ever holds the amount.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// assert_eq!(Money::parse_dollars("12.10").unwrap().cents(), 1210);
    /// assert_eq!(Money::parse_dollars("$1,234.5").unwrap().cents(), 123450);
    /// assert!(Money::parse_dollars("").is_err());
    /// assert!(Money::parse_dollars("-3").is_err());
    /// ```
    pub fn parse_dollars(input: &str) -> ValidationResult<Money> {
        let trimmed = input.trim();

        if trimmed.starts_with('-') {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        let cleaned: String = trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (whole, fraction): (&str, String) = match cleaned.split_once('.') {
            Some((whole, rest)) => (whole, rest.replace('.', "")),
            None => (cleaned.as_str(), String::new()),
        };

        let overflow = || ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: i64::MAX,
        };

        let mut cents: i64 = 0;
        for digit in whole.bytes().map(|b| i64::from(b - b'0')) {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit))
                .ok_or_else(overflow)?;
        }
        cents = cents.checked_mul(100).ok_or_else(overflow)?;

        let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = fraction_digits.next().unwrap_or(0);
        let hundredths = fraction_digits.next().unwrap_or(0);
        let round_up = i64::from(fraction_digits.next().unwrap_or(0) >= 5);

        cents
            .checked_add(tenths * 10 + hundredths + round_up)
            .map(Money)
            .ok_or_else(overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// Always uses `$`. Use [`Money::format_with_symbol`] when the shell is
/// configured with a different currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating addition: clamps at `i64::MAX` instead of overflowing.
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
        *self = *self + other;
    }
}

/// Saturating subtraction.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
