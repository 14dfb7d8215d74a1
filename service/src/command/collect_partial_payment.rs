//! [`Command`] for collecting a partial payment of a [`Lease`].

use common::Money;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Lease;
use crate::{domain::lease, Service};

use super::Command;

/// [`Command`] for collecting a partial payment of a [`Lease`].
///
/// Applies the paid amount to the outstanding balance without charging
/// anything.
#[derive(Clone, Debug)]
pub struct CollectPartialPayment {
    /// ID of the [`Lease`] to collect the payment for.
    pub lease_id: lease::Id,

    /// Paid amount.
    pub amount: Money,
}

/// Output of the [`CollectPartialPayment`] [`Command`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Output {
    /// Collected amount.
    pub paid: Money,

    /// Amount still owed on the [`Lease`].
    pub outstanding: Money,
}

impl Command<CollectPartialPayment> for Service {
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        cmd: CollectPartialPayment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CollectPartialPayment { lease_id, amount } = cmd;

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

        if !amount.is_positive() {
            return Err(tracerr::new!(E::Payment(lease::NonPositivePayment(
                amount
            ))));
        }
        let income = self
            .income
            .checked_add(amount)
            .ok_or(E::AmountOverflow(amount))
            .map_err(tracerr::wrap!())?;

        lease
            .make_payment(amount)
            .map_err(|e| tracerr::new!(E::from(e)))?;
        self.income = income;

        let outstanding = lease.outstanding_balance();
        log::info!(
            lease_id = %lease_id,
            amount = %amount,
            outstanding = %outstanding,
            "Partial payment collected"
        );

        Ok(Output {
            paid: amount,
            outstanding,
        })
    }
}

/// Error of [`CollectPartialPayment`] [`Command`] execution.
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

    /// Paid amount is not acceptable.
    #[display("Payment refused: {_0}")]
    #[from]
    Payment(lease::NonPositivePayment),
}
