//! [`Command`] for adding a new [`Tenant`].

use common::Money;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{tenant, Tenant},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Tenant`].
#[derive(Clone, Debug)]
pub struct AddTenant {
    /// ID of a new [`Tenant`].
    pub id: tenant::Id,

    /// [`tenant::Name`] of a new [`Tenant`].
    pub name: tenant::Name,

    /// [`tenant::Contact`] of a new [`Tenant`].
    pub contact: tenant::Contact,

    /// Security deposit paid by a new [`Tenant`].
    pub deposit: Money,
}

impl Command<AddTenant> for Service {
    type Ok = Tenant;
    type Err = Traced<ExecutionError>;

    fn execute_mut(&mut self, cmd: AddTenant) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddTenant {
            id,
            name,
            contact,
            deposit,
        } = cmd;

        if self.tenants.contains_key(&id) {
            return Err(tracerr::new!(E::TenantAlreadyExists(id)));
        }

        let tenant = Tenant::new(id, name, contact, deposit);
        log::info!(
            tenant_id = %tenant.id,
            deposit = %tenant.deposit(),
            "`Tenant` added"
        );
        _ = self.tenants.insert(tenant.id.clone(), tenant.clone());

        Ok(tenant)
    }
}

/// Error of [`AddTenant`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Tenant`] with the provided ID exists already.
    #[display("`Tenant(id: {_0})` already exists")]
    TenantAlreadyExists(#[error(not(source))] tenant::Id),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{domain::tenant, Command as _, Service};

    use super::{AddTenant, ExecutionError};

    fn cmd(id: &str, name: &str) -> AddTenant {
        AddTenant {
            id: tenant::Id::new(id).unwrap(),
            name: tenant::Name::new(name).unwrap(),
            contact: tenant::Contact::new("+91-91234-56789").unwrap(),
            deposit: Money::from_units(18_000),
        }
    }

    #[test]
    fn adds_tenant_without_leases() {
        let mut svc = Service::default();

        let t = svc.execute_mut(cmd("T002", "Rohan")).unwrap();

        assert!(t.active_leases().is_empty());
        assert_eq!(t.deposit(), Money::from_units(18_000));
        assert_eq!(svc.tenants.get(&t.id), Some(&t));
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut svc = Service::default();
        _ = svc.execute_mut(cmd("T002", "Rohan")).unwrap();

        let err = svc.execute_mut(cmd("T002", "Somebody")).unwrap_err();

        let err: &ExecutionError = err.as_ref();
        assert_eq!(err.to_string(), "`Tenant(id: T002)` already exists");
        assert_eq!(
            svc.tenants[&tenant::Id::new("T002").unwrap()].name,
            tenant::Name::new("Rohan").unwrap(),
        );
    }
}
