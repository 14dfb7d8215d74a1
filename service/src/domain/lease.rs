//! [`Lease`] definitions.

use std::str::FromStr;

use common::{define_kind, unit, DateOf, Money};
use derive_more::{AsRef, Display, Error, Into};

use crate::domain::{property, tenant};
#[cfg(doc)]
use crate::domain::{Property, Tenant};

/// Agreement binding a [`Property`] to a [`Tenant`] over a period.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lease {
    /// ID of this [`Lease`].
    pub id: Id,

    /// ID of the leased [`Property`].
    pub property_id: property::Id,

    /// ID of the [`Tenant`] leasing the [`Property`].
    pub tenant_id: tenant::Id,

    /// [`StartDate`] of this [`Lease`].
    pub start_date: StartDate,

    /// [`EndDate`] of this [`Lease`].
    pub end_date: EndDate,

    /// Billing [`Cycle`] label of this [`Lease`].
    pub cycle: Cycle,

    /// Current [`Status`] of this [`Lease`].
    status: Status,

    /// Amount currently owed on this [`Lease`].
    outstanding_balance: Money,
}

impl Lease {
    /// Creates a new [`Status::Pending`] [`Lease`] with nothing owed.
    #[must_use]
    pub fn new(
        id: Id,
        property_id: property::Id,
        tenant_id: tenant::Id,
        start_date: StartDate,
        end_date: EndDate,
        cycle: Cycle,
    ) -> Self {
        Self {
            id,
            property_id,
            tenant_id,
            start_date,
            end_date,
            cycle,
            status: Status::Pending,
            outstanding_balance: Money::ZERO,
        }
    }

    /// Returns current [`Status`] of this [`Lease`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Indicates whether this [`Lease`] is [`Status::Active`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Returns the amount currently owed on this [`Lease`].
    #[must_use]
    pub fn outstanding_balance(&self) -> Money {
        self.outstanding_balance
    }

    /// Moves this [`Lease`] from [`Status::Pending`] to [`Status::Active`].
    ///
    /// # Errors
    ///
    /// With [`TransitionError`] if this [`Lease`] is not
    /// [`Status::Pending`].
    pub fn activate(&mut self) -> Result<(), TransitionError> {
        self.transition(Status::Pending, Status::Active)
    }

    /// Moves this [`Lease`] from [`Status::Active`] to
    /// [`Status::Terminated`].
    ///
    /// # Errors
    ///
    /// With [`TransitionError`] if this [`Lease`] is not [`Status::Active`].
    pub fn terminate(&mut self) -> Result<(), TransitionError> {
        self.transition(Status::Active, Status::Terminated)
    }

    /// Adds the provided `amount` to the outstanding balance.
    pub fn add_charge(&mut self, amount: Money) {
        self.outstanding_balance += amount;
    }

    /// Applies a payment of the provided `amount` to the outstanding
    /// balance.
    ///
    /// Overpayment is absorbed: the balance never goes below zero.
    ///
    /// # Errors
    ///
    /// With [`NonPositivePayment`] if the `amount` is not greater than zero.
    pub fn make_payment(
        &mut self,
        amount: Money,
    ) -> Result<(), NonPositivePayment> {
        if !amount.is_positive() {
            return Err(NonPositivePayment(amount));
        }
        self.outstanding_balance =
            self.outstanding_balance.saturating_sub(amount);
        Ok(())
    }

    /// Moves this [`Lease`] to the `to` [`Status`] if it's currently in the
    /// `from` one.
    fn transition(
        &mut self,
        from: Status,
        to: Status,
    ) -> Result<(), TransitionError> {
        if self.status != from {
            return Err(TransitionError {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }
}

define_kind! {
    #[doc = "Status of a [`Lease`]."]
    enum Status {
        #[doc = "[`Lease`] is created, but not yet in force."]
        Pending = 1,

        #[doc = "[`Lease`] is in force."]
        Active = 2,

        #[doc = "[`Lease`] is terminated permanently."]
        Terminated = 3,
    }
}

/// Error of an invalid [`Lease`] [`Status`] transition.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`Lease` cannot move from `{from}` to `{to}`")]
pub struct TransitionError {
    /// [`Status`] the [`Lease`] is in.
    pub from: Status,

    /// [`Status`] the [`Lease`] was requested to move to.
    pub to: Status,
}

/// Error of paying a non-positive amount.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("payment amount must be positive, but is {_0}")]
pub struct NonPositivePayment(#[error(not(source))] pub Money);

/// ID of a [`Lease`].
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
        Self::new(s).ok_or("invalid `lease::Id`")
    }
}

/// Billing cycle label of a [`Lease`] (`MONTHLY`, `QUARTERLY`, etc).
///
/// Informational only: doesn't drive any scheduling.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Cycle(String);

impl Cycle {
    /// Creates a new [`Cycle`] if the given `cycle` is valid.
    #[must_use]
    pub fn new(cycle: impl Into<String>) -> Option<Self> {
        let cycle = cycle.into();
        Self::check(&cycle).then_some(Self(cycle))
    }

    /// Checks whether the given `cycle` is a valid [`Cycle`].
    fn check(cycle: impl AsRef<str>) -> bool {
        let cycle = cycle.as_ref();
        cycle.trim() == cycle && !cycle.is_empty() && cycle.len() <= 64
    }
}

impl FromStr for Cycle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Cycle`")
    }
}

/// Date when a [`Lease`] starts.
pub type StartDate = DateOf<(Lease, unit::Start)>;

/// Date when a [`Lease`] ends.
pub type EndDate = DateOf<(Lease, unit::End)>;
