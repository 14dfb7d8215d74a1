//! [`Command`] for terminating a [`Lease`].

use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::{Property, Tenant};
use crate::{
    domain::{lease, Lease},
    Service,
};

use super::Command;

/// [`Command`] for terminating a [`Lease`].
///
/// Releases the leased [`Property`] and detaches the [`Lease`] from its
/// [`Tenant`].
#[derive(Clone, Debug)]
pub struct TerminateLease {
    /// ID of the [`Lease`] to be terminated.
    pub lease_id: lease::Id,
}

impl Command<TerminateLease> for Service {
    type Ok = Lease;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        cmd: TerminateLease,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let TerminateLease { lease_id } = cmd;

        let lease = self
            .leases
            .get_mut(&lease_id)
            .ok_or_else(|| E::LeaseNotExists(lease_id.clone()))
            .map_err(tracerr::wrap!())?;
        lease.terminate().map_err(|e| {
            tracerr::new!(E::LeaseNotActive {
                id: lease_id.clone(),
                status: e.from,
            })
        })?;

        match self.properties.get_mut(&lease.property_id) {
            Some(property) => property.is_available = true,
            None => log::warn!(
                lease_id = %lease_id,
                property_id = %lease.property_id,
                "Terminated `Lease` refers to unknown `Property`"
            ),
        }
        match self.tenants.get_mut(&lease.tenant_id) {
            Some(tenant) => tenant.remove_lease(&lease_id),
            None => log::warn!(
                lease_id = %lease_id,
                tenant_id = %lease.tenant_id,
                "Terminated `Lease` refers to unknown `Tenant`"
            ),
        }

        log::info!(lease_id = %lease_id, "`Lease` terminated");

        Ok(lease.clone())
    }
}

/// Error of [`TerminateLease`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
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
}
