//! [`Command`] for collecting the full rent of a [`Lease`].

use common::Money;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::{Lease, Property};
use crate::{
    domain::{lease, property},
    Service,
};

use super::Command;

/// [`Command`] for collecting the full rent of a [`Lease`].
///
/// Charges the rent of the leased [`Property`] and pays it off at once, so
/// the outstanding balance stays the same.
#[derive(Clone, Debug)]
pub struct CollectFullRent {
    /// ID of the [`Lease`] to collect the rent for.
    pub lease_id: lease::Id,
}

impl Command<CollectFullRent> for Service {
    /// Collected amount.
    type Ok = Money;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        cmd: CollectFullRent,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CollectFullRent { lease_id } = cmd;

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
        if !rent.is_positive() {
            return Err(tracerr::new!(E::Payment(lease::NonPositivePayment(
                rent
            ))));
        }

        let (Some(income), Some(_)) = (
            self.income.checked_add(rent),
            lease.outstanding_balance().checked_add(rent),
        ) else {
            return Err(tracerr::new!(E::AmountOverflow(rent)));
        };

        lease.add_charge(rent);
        lease
            .make_payment(rent)
            .map_err(|e| tracerr::new!(E::from(e)))?;
        self.income = income;

        log::info!(
            lease_id = %lease_id,
            amount = %rent,
            "Full rent collected"
        );

        Ok(rent)
    }
}

/// Error of [`CollectFullRent`] [`Command`] execution.
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

    /// Rent of the leased [`Property`] cannot be paid.
    #[display("Rent cannot be paid: {_0}")]
    #[from]
    Payment(lease::NonPositivePayment),

    /// Leased [`Property`] does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),
}
