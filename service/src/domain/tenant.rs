//! [`Tenant`] definitions.

use std::{collections::BTreeSet, str::FromStr};

use common::Money;
use derive_more::{AsRef, Display, Error, Into};

use crate::domain::lease;
#[cfg(doc)]
use crate::domain::Lease;

/// Person leasing [`Property`]s.
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tenant {
    /// ID of this [`Tenant`].
    pub id: Id,

    /// [`Name`] of this [`Tenant`].
    pub name: Name,

    /// [`Contact`] of this [`Tenant`].
    pub contact: Contact,

    /// Security deposit held for this [`Tenant`].
    deposit: Money,

    /// IDs of the active [`Lease`]s of this [`Tenant`].
    active_leases: BTreeSet<lease::Id>,
}

impl Tenant {
    /// Creates a new [`Tenant`] without any active [`Lease`]s.
    #[must_use]
    pub fn new(id: Id, name: Name, contact: Contact, deposit: Money) -> Self {
        Self {
            id,
            name,
            contact,
            deposit,
            active_leases: BTreeSet::new(),
        }
    }

    /// Returns the security deposit held for this [`Tenant`].
    #[must_use]
    pub fn deposit(&self) -> Money {
        self.deposit
    }

    /// Tops up the security deposit of this [`Tenant`].
    pub fn add_to_deposit(&mut self, amount: Money) {
        self.deposit += amount;
    }

    /// Deducts the provided `amount` from the security deposit of this
    /// [`Tenant`].
    ///
    /// # Errors
    ///
    /// With [`InsufficientDeposit`] if the `amount` exceeds the deposit. The
    /// deposit stays untouched in such case.
    pub fn deduct_from_deposit(
        &mut self,
        amount: Money,
    ) -> Result<(), InsufficientDeposit> {
        if amount > self.deposit {
            return Err(InsufficientDeposit {
                requested: amount,
                available: self.deposit,
            });
        }
        self.deposit -= amount;
        Ok(())
    }

    /// Returns IDs of the active [`Lease`]s of this [`Tenant`].
    #[must_use]
    pub fn active_leases(&self) -> &BTreeSet<lease::Id> {
        &self.active_leases
    }

    /// Registers the [`Lease`] with the provided ID as an active one.
    pub fn add_lease(&mut self, id: lease::Id) {
        _ = self.active_leases.insert(id);
    }

    /// Unregisters the active [`Lease`] with the provided ID, if any.
    pub fn remove_lease(&mut self, id: &lease::Id) {
        _ = self.active_leases.remove(id);
    }
}

/// Error of deducting more than a [`Tenant`] deposit holds.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("cannot deduct {requested} from the deposit of {available}")]
pub struct InsufficientDeposit {
    /// Requested amount.
    pub requested: Money,

    /// Deposit available.
    pub available: Money,
}

/// ID of a [`Tenant`].
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
        Self::new(s).ok_or("invalid `tenant::Id`")
    }
}

/// Name of a [`Tenant`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 256
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Contact (phone, email, etc.) of a [`Tenant`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Contact(String);

impl Contact {
    /// Creates a new [`Contact`] if the given `contact` is valid.
    #[must_use]
    pub fn new(contact: impl Into<String>) -> Option<Self> {
        let contact = contact.into();
        Self::check(&contact).then_some(Self(contact))
    }

    /// Checks whether the given `contact` is a valid [`Contact`].
    fn check(contact: impl AsRef<str>) -> bool {
        let contact = contact.as_ref();
        contact.trim() == contact && !contact.is_empty() && contact.len() <= 256
    }
}

impl FromStr for Contact {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Contact`")
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::lease;

    use super::{Contact, Id, Name, Tenant};

    fn tenant(deposit: i64) -> Tenant {
        Tenant::new(
            Id::new("T001").unwrap(),
            Name::new("Ananya").unwrap(),
            Contact::new("+91-98765-43210").unwrap(),
            Money::from_units(deposit),
        )
    }

    fn lease_id(id: &str) -> lease::Id {
        lease::Id::new(id).unwrap()
    }

    #[test]
    fn deducts_from_deposit() {
        let mut t = tenant(24_000);

        t.deduct_from_deposit(Money::from_units(4_000)).unwrap();
        assert_eq!(t.deposit(), Money::from_units(20_000));

        t.deduct_from_deposit(Money::from_units(20_000)).unwrap();
        assert_eq!(t.deposit(), Money::ZERO);
    }

    #[test]
    fn refuses_to_deduct_more_than_deposit() {
        let mut t = tenant(1_000);

        let err = t.deduct_from_deposit(Money::from_units(1_001)).unwrap_err();
        assert_eq!(err.requested, Money::from_units(1_001));
        assert_eq!(err.available, Money::from_units(1_000));
        assert_eq!(t.deposit(), Money::from_units(1_000));
    }

    #[test]
    fn tops_up_deposit() {
        let mut t = tenant(100);
        t.add_to_deposit(Money::from_units(50));
        assert_eq!(t.deposit(), Money::from_units(150));
    }

    #[test]
    fn active_leases_have_no_duplicates() {
        let mut t = tenant(0);
        assert!(t.active_leases().is_empty());

        t.add_lease(lease_id("L1001"));
        t.add_lease(lease_id("L1001"));
        t.add_lease(lease_id("L1002"));
        assert_eq!(t.active_leases().len(), 2);

        t.remove_lease(&lease_id("L1001"));
        assert!(!t.active_leases().contains(&lease_id("L1001")));
        assert!(t.active_leases().contains(&lease_id("L1002")));

        t.remove_lease(&lease_id("L9999"));
        assert_eq!(t.active_leases().len(), 1);
    }
}
