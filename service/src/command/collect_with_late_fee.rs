//! [`Command`] for collecting an overdue rent of a [`Lease`].

use common::{Money, Percent};
use derive_more::{Display, Error, From};
use smart_default::SmartDefault;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::{Lease, Property};
use crate::{
    domain::{lease, property},
    Service,
};

use super::Command;

/// Late fee policy of the [`CollectWithLateFee`] [`Command`].
///
/// The fee is `base + per_day * days_late`, but never more than `cap` of the
/// rent.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Fixed part of the late fee.
    #[default(Money::from_units(50))]
    pub base: Money,

    /// Late fee accrued for each overdue day.
    #[default(Money::from_units(5))]
    pub per_day: Money,

    /// Maximum late fee as a share of the rent.
    #[default(Percent::whole(25))]
    pub cap: Percent,
}

impl Config {
    /// Calculates the late fee for the provided `rent` overdue by
    /// `days_late`.
    #[must_use]
    pub fn late_fee(&self, rent: Money, days_late: u32) -> Money {
        let cap = self.cap.of(rent);
        self.per_day
            .checked_mul(days_late)
            .and_then(|fee| fee.checked_add(self.base))
            .map_or(cap, |fee| fee.min(cap))
    }
}

/// [`Command`] for collecting an overdue rent of a [`Lease`].
///
/// Charges the rent of the leased [`Property`] together with a late fee and
/// pays both off at once.
#[derive(Clone, Debug)]
pub struct CollectWithLateFee {
    /// ID of the [`Lease`] to collect the rent for.
    pub lease_id: lease::Id,

    /// Number of days the rent is overdue.
    pub days_late: u32,
}

/// Output of the [`CollectWithLateFee`] [`Command`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Output {
    /// Collected rent.
    pub rent: Money,

    /// Collected late fee.
    pub late_fee: Money,
}

impl Output {
    /// Returns the total collected amount.
    #[must_use]
    pub fn total(&self) -> Money {
        self.rent + self.late_fee
    }
}

impl Command<CollectWithLateFee> for Service {
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        cmd: CollectWithLateFee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CollectWithLateFee {
            lease_id,
            days_late,
        } = cmd;

        let lease = self
            .leases
            .get_mut(&lease_id)
            .ok_or_else(|| E::LeaseNotExists(lease_id.clone()))
            .map_err(tracerr::wrap!())?;
        if !lease.is_active() {
            return Err(tracerr::new!(E::LeaseNotActive {
                id: lease_id,
                status: lease.status(),
            }));
        }
        let rent = self
            .properties
            .get(&lease.property_id)
            .ok_or_else(|| E::PropertyNotExists(lease.property_id.clone()))
            .map_err(tracerr::wrap!())?
            .rent;

        let late_fee = self.config.late_fee.late_fee(rent, days_late);
        let total = rent
            .checked_add(late_fee)
            .ok_or(E::AmountOverflow(rent))
            .map_err(tracerr::wrap!())?;
        if !total.is_positive() {
            return Err(tracerr::new!(E::Payment(lease::NonPositivePayment(
                total
            ))));
        }
        let (Some(income), Some(_)) = (
            self.income.checked_add(total),
            lease.outstanding_balance().checked_add(total),
        ) else {
            return Err(tracerr::new!(E::AmountOverflow(total)));
        };

        lease.add_charge(total);
        lease
            .make_payment(total)
            .map_err(|e| tracerr::new!(E::from(e)))?;
        self.income = income;

        let out = Output { rent, late_fee };

        log::info!(
            lease_id = %lease_id,
            rent = %out.rent,
            late_fee = %out.late_fee,
            days_late,
            "Overdue rent collected"
        );

        Ok(out)
    }
}

/// Error of [`CollectWithLateFee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Collected amount doesn't fit into the tracked totals.
    #[display("Collecting {_0} overflows the tracked totals")]
    AmountOverflow(#[error(not(source))] Money),

    /// [`Lease`] is not [`lease::Status::Active`].
    #[display("`Lease(id: {id})` is `{status}`, not `ACTIVE`")]
    LeaseNotActive {
        /// ID of the [`Lease`].
        id: lease::Id,

        /// Current [`lease::Status`] of the [`Lease`].
        status: lease::Status,
    },

    /// [`Lease`] with the provided ID does not exist.
    #[display("`Lease(id: {_0})` does not exist")]
    LeaseNotExists(#[error(not(source))] lease::Id),

    /// Rent with the late fee cannot be paid.
    #[display("Rent cannot be paid: {_0}")]
    #[from]
    Payment(lease::NonPositivePayment),

    /// Leased [`Property`] does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),
}
