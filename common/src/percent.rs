//! [`Percent`]-related definitions.

use rust_decimal::Decimal;

use crate::Money;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Creates a new [`Percent`] from the provided whole number of percents.
    ///
    /// # Panics
    ///
    /// If the provided value is greater than `100`.
    #[must_use]
    pub const fn whole(val: u32) -> Self {
        assert!(val <= 100, "`Percent` cannot be greater than `100`");
        Self(Decimal::from_parts(val, 0, 0, false, 0))
    }

    /// Returns this [`Percent`] as a decimal value in `[0; 100]` range.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Calculates this [`Percent`] of the provided [`Money`] amount.
    ///
    /// The result never exceeds the provided amount.
    #[must_use]
    pub fn of(self, money: Money) -> Money {
        Money::new(money.amount() / Decimal::ONE_HUNDRED * self.0)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::Decimal;
    use ::serde::{
        de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::Percent;

    impl Serialize for Percent {
        fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
            Serialize::serialize(&self.0, ser)
        }
    }

    impl<'de> Deserialize<'de> for Percent {
        fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
            let val = <Decimal as Deserialize>::deserialize(de)?;
            Self::new(val).ok_or_else(|| {
                D::Error::custom("`Percent` must be in `[0; 100]` range")
            })
        }
    }
}
