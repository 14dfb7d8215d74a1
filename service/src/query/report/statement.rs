//! [`Statement`] definition.

use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{tenant, Lease, Tenant},
    Query, Service,
};

/// [`Query`] of a [`Tenant`] statement: the [`Tenant`] itself along with its
/// active [`Lease`]s.
#[derive(Clone, Debug)]
pub struct Statement {
    /// ID of the [`Tenant`] to make the statement for.
    pub tenant_id: tenant::Id,
}

/// Output of the [`Statement`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// [`Tenant`] the statement is made for.
    pub tenant: Tenant,

    /// Active [`Lease`]s of the [`Tenant`], ordered by ID.
    pub leases: Vec<Lease>,
}

impl Query<Statement> for Service {
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    fn execute(
        &self,
        Statement { tenant_id }: Statement,
    ) -> Result<Self::Ok, Self::Err> {
        let tenant = self
            .tenants
            .get(&tenant_id)
            .ok_or(ExecutionError::TenantNotExists(tenant_id))
            .map_err(tracerr::wrap!())?;

        let leases = tenant
            .active_leases()
            .iter()
            .filter_map(|id| self.leases.get(id))
            .cloned()
            .collect();

        Ok(Output {
            tenant: tenant.clone(),
            leases,
        })
    }
}

/// Error of [`Statement`] [`Query`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Tenant`] with the provided ID does not exist.
    #[display("`Tenant(id: {_0})` does not exist")]
    TenantNotExists(#[error(not(source))] tenant::Id),
}
