//! [`Property`] definitions.

use std::str::FromStr;

use common::{define_kind, Money, Percent};
use derive_more::{AsRef, Display, From, Into};

/// Property leased to [`Tenant`]s.
///
/// [`Tenant`]: crate::domain::Tenant
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Address`] of this [`Property`].
    pub address: Address,

    /// Monthly rent of this [`Property`].
    pub rent: Money,

    /// Indicator whether this [`Property`] may be leased.
    ///
    /// Is `false` while exactly one active [`Lease`] references this
    /// [`Property`].
    ///
    /// [`Lease`]: crate::domain::Lease
    pub is_available: bool,

    /// [`Details`] specific to the [`Kind`] of this [`Property`].
    pub details: Details,
}

impl Property {
    /// Creates a new available [`Property`].
    #[must_use]
    pub fn new(
        id: Id,
        address: Address,
        rent: Money,
        details: impl Into<Details>,
    ) -> Self {
        Self {
            id,
            address,
            rent,
            is_available: true,
            details: details.into(),
        }
    }

    /// Returns [`Kind`] of this [`Property`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.details.kind()
    }

    /// Calculates the monthly maintenance charge of this [`Property`].
    #[must_use]
    pub fn maintenance_charge(&self) -> Money {
        match &self.details {
            Details::Apartment(a) => a.maintenance_charge(self.rent),
            Details::House(h) => h.maintenance_charge(self.rent),
        }
    }

    /// Calculates the total monthly charge of this [`Property`]: its rent
    /// plus its [maintenance charge].
    ///
    /// [maintenance charge]: Property::maintenance_charge
    #[must_use]
    pub fn monthly_charge(&self) -> Money {
        self.rent + self.maintenance_charge()
    }
}

/// [`Kind`]-specific details of a [`Property`].
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum Details {
    #[doc(hidden)]
    Apartment(Apartment),
    #[doc(hidden)]
    House(House),
}

impl Details {
    /// Returns [`Kind`] of these [`Details`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Apartment(_) => Kind::Apartment,
            Self::House(_) => Kind::House,
        }
    }
}

/// Apartment in a multi-unit building.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Apartment {
    /// Homeowners association fee.
    pub hoa_fee: Money,

    /// [`Floor`] the apartment is located on.
    pub floor: Floor,
}

impl Apartment {
    /// Share of the rent taken for the building upkeep.
    pub const UPKEEP_RATE: Percent = Percent::whole(2);

    /// Minimal building upkeep charge.
    pub const MIN_UPKEEP: Money = Money::from_units(50);

    /// Calculates the maintenance charge of this [`Apartment`] rented for
    /// the provided `rent`.
    #[must_use]
    pub fn maintenance_charge(&self, rent: Money) -> Money {
        self.hoa_fee + Self::UPKEEP_RATE.of(rent).max(Self::MIN_UPKEEP)
    }
}

/// Floor of an [`Apartment`].
pub type Floor = i16;

/// Standalone house.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct House {
    /// Yard maintenance fee.
    pub yard_maintenance_fee: Money,

    /// Indicator whether the house has a garage.
    pub has_garage: bool,
}

impl House {
    /// Share of the rent taken for the structure upkeep.
    pub const UPKEEP_RATE: Percent = Percent::whole(3);

    /// Minimal structure upkeep charge.
    pub const MIN_UPKEEP: Money = Money::from_units(100);

    /// Calculates the maintenance charge of this [`House`] rented for the
    /// provided `rent`.
    #[must_use]
    pub fn maintenance_charge(&self, rent: Money) -> Money {
        self.yard_maintenance_fee
            + Self::UPKEEP_RATE.of(rent).max(Self::MIN_UPKEEP)
    }
}

define_kind! {
    #[doc = "Kind of a [`Property`]."]
    enum Kind {
        #[doc = "An [`Apartment`]."]
        Apartment = 1,

        #[doc = "A [`House`]."]
        House = 2,
    }
}

/// ID of a [`Property`].
#[derive(
    AsRef, Clone, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
#[as_ref(forward)]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`Id`].
    fn check(id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        !id.is_empty()
            && id.len() <= 64
            && !id.contains(char::is_whitespace)
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `property::Id`")
    }
}

/// Address of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use super::{Address, Apartment, House, Id, Kind, Property};

    fn money(units: i64) -> Money {
        Money::from_units(units)
    }

    fn apartment(rent: i64, hoa_fee: i64) -> Property {
        Property::new(
            Id::new("A101").unwrap(),
            Address::new("12B MG Road, Chennai").unwrap(),
            money(rent),
            Apartment {
                hoa_fee: money(hoa_fee),
                floor: 3,
            },
        )
    }

    fn house(rent: i64, yard_fee: i64) -> Property {
        Property::new(
            Id::new("H201").unwrap(),
            Address::new("7 Green St, Coimbatore").unwrap(),
            money(rent),
            House {
                yard_maintenance_fee: money(yard_fee),
                has_garage: true,
            },
        )
    }

    #[test]
    fn new_property_is_available() {
        let p = apartment(12_000, 800);
        assert!(p.is_available);
        assert_eq!(p.kind(), Kind::Apartment);
        assert_eq!(house(1, 1).kind(), Kind::House);
    }

    #[test]
    fn apartment_maintenance_charge() {
        let p = apartment(12_000, 800);
        assert_eq!(p.maintenance_charge(), money(1_040));
        assert_eq!(p.monthly_charge(), money(13_040));
    }

    #[test]
    fn apartment_upkeep_floor_applies_below_2500() {
        assert_eq!(apartment(0, 0).maintenance_charge(), money(50));
        assert_eq!(apartment(2_000, 100).maintenance_charge(), money(150));
        assert_eq!(apartment(2_500, 0).maintenance_charge(), money(50));
        assert_eq!(apartment(3_000, 0).maintenance_charge(), money(60));
    }

    #[test]
    fn apartment_maintenance_is_monotonic() {
        let mut prev = Money::ZERO;
        for rent in (0..=10_000).step_by(250) {
            let charge = apartment(rent, 300).maintenance_charge();
            assert!(charge >= prev, "rent {rent}: {charge} < {prev}");
            prev = charge;
        }

        let mut prev = Money::ZERO;
        for hoa in (0..=2_000).step_by(100) {
            let charge = apartment(5_000, hoa).maintenance_charge();
            assert!(charge >= prev, "HOA {hoa}: {charge} < {prev}");
            prev = charge;
        }
    }

    #[test]
    fn house_maintenance_charge() {
        let p = house(20_000, 1_200);
        assert_eq!(p.maintenance_charge(), money(1_800));
        assert_eq!(p.monthly_charge(), money(21_800));
    }

    #[test]
    fn house_upkeep_floor_applies_below_3333() {
        assert_eq!(house(3_000, 0).maintenance_charge(), money(100));
        assert_eq!(house(3_333, 0).maintenance_charge(), money(100));
        assert_eq!(house(3_400, 0).maintenance_charge(), money(102));
        assert_eq!(house(1_000, 900).maintenance_charge(), money(1_000));
    }

    #[test]
    fn monthly_charge_is_rent_plus_maintenance() {
        for p in [
            apartment(15_000, 1_000),
            apartment(1, 0),
            house(18_000, 900),
            house(0, 0),
        ] {
            assert_eq!(p.monthly_charge(), p.rent + p.maintenance_charge());
        }
    }

    #[test]
    fn id_validation() {
        assert!(Id::new("A101").is_some());
        assert!(Id::new("").is_none());
        assert!(Id::new("A 101").is_none());
        assert!("H202".parse::<Id>().is_ok());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(Kind::Apartment.to_string(), "APARTMENT");
        assert_eq!("HOUSE".parse::<Kind>().unwrap(), Kind::House);
    }
}
