//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{Add, AddAssign, Sub, SubAssign, Sum};
use rust_decimal::Decimal;

/// Amount of money.
///
/// All the amounts in the system share the same currency.
#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Sub,
    SubAssign,
    Sum,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct Money(Decimal);

impl Money {
    /// Zero [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] of the provided `amount`.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a new [`Money`] of the provided whole `units`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "splitting into 32-bit parts"
    )]
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(Decimal::from_parts(
            units.unsigned_abs() as u32,
            (units.unsigned_abs() >> 32) as u32,
            0,
            units < 0,
            0,
        ))
    }

    /// Returns the amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] is strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds the `rhs` to this [`Money`].
    ///
    /// [`None`] is returned if the result overflows.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Multiplies this [`Money`] by the provided `times`.
    ///
    /// [`None`] is returned if the result overflows.
    #[must_use]
    pub fn checked_mul(self, times: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(times)).map(Self)
    }

    /// Subtracts the `rhs` from this [`Money`], flooring the result at
    /// [`Money::ZERO`].
    #[must_use]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        (self - rhs).max(Self::ZERO)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}
