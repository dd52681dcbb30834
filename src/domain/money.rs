//! Monetary value types with exact decimal arithmetic.
//!
//! Never use floating point for money. [`MonetaryAmount`] wraps
//! `rust_decimal::Decimal` at the currency scale (2 decimal digits);
//! [`Percentage`] is a ratio in [0, 1] kept at higher precision (4 digits).
//!
//! [`MonetaryAmount::multiply_by`] is the single rounding point in the whole
//! system; every distribution computation routes through it.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Number of decimal digits in the currency's minor unit.
const CURRENCY_SCALE: u32 = 2;

/// Number of decimal digits a percentage ratio may carry.
const PERCENTAGE_SCALE: u32 = 4;

/// An exact monetary amount with a fixed scale of 2.
///
/// Immutable value type: every operation returns a new amount. Construction
/// rejects literals that would lose precision at the currency scale, so
/// arithmetic never silently drops sub-cent digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonetaryAmount(Decimal);

impl MonetaryAmount {
    /// Creates an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] if the value carries more than
    /// 2 decimal places.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value.round_dp(CURRENCY_SCALE) != value {
            return Err(DomainError::InvalidAmount(format!(
                "'{value}' exceeds the currency scale of {CURRENCY_SCALE} decimal places"
            )));
        }
        Ok(Self(value))
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Exact sum, same scale.
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Exact difference, same scale.
    pub fn subtract(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }

    /// Multiplies by a percentage and rounds half-up to the currency scale.
    ///
    /// This is the only place in the system where rounding occurs.
    pub fn multiply_by(self, percentage: Percentage) -> Self {
        Self(
            (self.0 * percentage.as_decimal())
                .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns the arithmetic negation.
    pub fn negate(self) -> Self {
        Self(-self.0)
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for MonetaryAmount {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(text.trim())
            .map_err(|_| DomainError::InvalidAmount(format!("'{text}' is not a decimal number")))?;
        Self::new(value)
    }
}

impl TryFrom<String> for MonetaryAmount {
    type Error = DomainError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<MonetaryAmount> for String {
    fn from(amount: MonetaryAmount) -> Self {
        amount.to_string()
    }
}

/// An allocation or benefit ratio in [0, 1], stored at scale 4.
///
/// Parses from both `"50%"` and `"0.5"` textual forms; the two are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Percentage(Decimal);

impl Percentage {
    /// Creates a percentage from a decimal ratio.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPercentage`] if the value is outside
    /// [0, 1] or carries more than 4 decimal places.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(DomainError::InvalidPercentage(format!(
                "'{value}' is outside [0, 1]"
            )));
        }
        if value.round_dp(PERCENTAGE_SCALE) != value {
            return Err(DomainError::InvalidPercentage(format!(
                "'{value}' exceeds {PERCENTAGE_SCALE} decimal places"
            )));
        }
        Ok(Self(value.normalize()))
    }

    /// Parses a textual form: `"NN%"` or a decimal fraction like `"0.5"`.
    pub fn value_of(text: &str) -> Result<Self, DomainError> {
        let trimmed = text.trim();
        let value = if let Some(percent) = trimmed.strip_suffix('%') {
            let number = Decimal::from_str(percent.trim()).map_err(|_| {
                DomainError::InvalidPercentage(format!("'{text}' is not a percentage"))
            })?;
            number / dec!(100)
        } else {
            Decimal::from_str(trimmed).map_err(|_| {
                DomainError::InvalidPercentage(format!("'{text}' is not a percentage"))
            })?
        };
        Self::new(value)
    }

    /// The 0% constant.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The 100% constant.
    pub fn one_hundred() -> Self {
        Self(Decimal::ONE)
    }

    /// Returns the underlying ratio.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Exact sum of two percentages.
    ///
    /// # Errors
    ///
    /// Fails if the result exceeds 100%.
    pub fn add(self, other: Self) -> Result<Self, DomainError> {
        Self::new(self.0 + other.0)
    }

    /// Exact difference of two percentages.
    ///
    /// # Errors
    ///
    /// Fails if the result drops below 0%.
    pub fn subtract(self, other: Self) -> Result<Self, DomainError> {
        Self::new(self.0 - other.0)
    }

    /// Returns true for the 0% value.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * dec!(100)).normalize())
    }
}

impl FromStr for Percentage {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::value_of(text)
    }
}

impl TryFrom<String> for Percentage {
    type Error = DomainError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::value_of(&text)
    }
}

impl From<Percentage> for String {
    fn from(percentage: Percentage) -> Self {
        percentage.to_string()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn multiply_by_is_deterministic(
            cents in 0i64..1_000_000_000i64,
            basis_points in 0i64..=10_000i64
        ) {
            let amount = MonetaryAmount::new(Decimal::new(cents, 2)).unwrap();
            let rate = Percentage::new(Decimal::new(basis_points, 4)).unwrap();
            prop_assert_eq!(amount.multiply_by(rate), amount.multiply_by(rate));
        }

        #[test]
        fn addition_is_exact_and_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = MonetaryAmount::new(Decimal::new(a, 2)).unwrap();
            let mb = MonetaryAmount::new(Decimal::new(b, 2)).unwrap();
            let mc = MonetaryAmount::new(Decimal::new(c, 2)).unwrap();
            prop_assert_eq!(ma.add(mb).add(mc), ma.add(mb.add(mc)));
        }
    }
}
