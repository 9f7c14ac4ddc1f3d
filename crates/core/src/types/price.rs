//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as [`Decimal`] so totals never pick up binary floating
//! point noise, but they are persisted as plain JSON numbers because that is
//! the format the cart slot has always used.
//!
//! Every price is rounded to whole cents and capped at [`Price::MAX`] when it
//! is built. Fifteen significant digits survive the trip through an `f64`
//! exactly, so what is saved always reads back as the same amount.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The amount is above [`Price::MAX`].
    #[error("price too large (got {0})")]
    TooLarge(Decimal),
    /// The input text is not a number.
    #[error("invalid price {0:?}")]
    Invalid(String),
}

/// A non-negative unit price in the storefront's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Largest price accepted: 15 significant digits.
    pub const MAX: Self = Self(Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2));

    /// Create a price from a decimal amount, rounded to cents.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use saber_simples_core::Price;
    ///
    /// let price = Price::new(Decimal::new(12_345, 4)).unwrap();
    /// assert_eq!(price, Price::from_cents(123));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero and
    /// [`PriceError::TooLarge`] if it is above [`Price::MAX`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if cents.is_sign_negative() && !cents.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if cents > Self::MAX.0 {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self(cents.abs()))
    }

    /// Create a price from an amount in cents.
    ///
    /// ```
    /// use saber_simples_core::Price;
    ///
    /// assert_eq!(Price::from_cents(250).to_string(), "2.50");
    /// ```
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Parse a price from attribute text such as `"19.90"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] for non-numeric text and
    /// [`PriceError::Negative`] for amounts below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format for display in the given currency, e.g. `R$ 2,50`.
    ///
    /// ```
    /// use saber_simples_core::{CurrencyCode, Price};
    ///
    /// let price = Price::from_cents(1990);
    /// assert_eq!(price.display(CurrencyCode::BRL), "R$ 19,90");
    /// assert_eq!(price.display(CurrencyCode::USD), "$ 19.90");
    /// ```
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        let fixed = self.fixed();
        let fixed = if currency.decimal_separator() == '.' {
            fixed
        } else {
            fixed.replace('.', &currency.decimal_separator().to_string())
        };
        format!("{} {fixed}", currency.symbol())
    }

    /// Two-decimal representation with a `.` separator.
    fn fixed(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fixed())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

/// ISO 4217 currency codes the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Symbol shown before the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Separator between the integer and fractional parts.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        match self {
            Self::BRL | Self::EUR => ',',
            Self::USD => '.',
        }
    }

}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::BRL),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            other => Err(format!("unsupported currency {other:?}")),
        }
    }
}
