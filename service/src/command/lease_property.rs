//! [`Command`] for leasing a [`Property`] to a [`Tenant`].

use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::{Property, Tenant};
use crate::{
    domain::{lease, property, tenant, Lease},
    Service,
};

use super::Command;

/// [`Command`] for leasing a [`Property`] to a [`Tenant`].
///
/// Creates a new [`Lease`] and activates it right away.
#[derive(Clone, Debug)]
pub struct LeaseProperty {
    /// ID of a new [`Lease`].
    pub lease_id: lease::Id,

    /// ID of the [`Property`] to lease.
    pub property_id: property::Id,

    /// ID of the [`Tenant`] leasing the [`Property`].
    pub tenant_id: tenant::Id,

    /// [`lease::StartDate`] of a new [`Lease`].
    pub start_date: lease::StartDate,

    /// [`lease::EndDate`] of a new [`Lease`].
    ///
    /// Not required to follow the [`lease::StartDate`].
    pub end_date: lease::EndDate,

    /// Billing [`lease::Cycle`] of a new [`Lease`].
    pub cycle: lease::Cycle,
}

impl Command<LeaseProperty> for Service {
    type Ok = Lease;
    type Err = Traced<ExecutionError>;

    fn execute_mut(
        &mut self,
        cmd: LeaseProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let LeaseProperty {
            lease_id,
            property_id,
            tenant_id,
            start_date,
            end_date,
            cycle,
        } = cmd;

        if self.leases.contains_key(&lease_id) {
            return Err(tracerr::new!(E::LeaseAlreadyExists(lease_id)));
        }
        let property = self
            .properties
            .get_mut(&property_id)
            .ok_or_else(|| E::PropertyNotExists(property_id.clone()))
            .map_err(tracerr::wrap!())?;
        let tenant = self
            .tenants
            .get_mut(&tenant_id)
            .ok_or_else(|| E::TenantNotExists(tenant_id.clone()))
            .map_err(tracerr::wrap!())?;
        if !property.is_available {
            return Err(tracerr::new!(E::PropertyNotAvailable(property_id)));
        }

        if end_date.coerce::<()>() <= start_date.coerce() {
            log::warn!(
                lease_id = %lease_id,
                start_date = %start_date,
                end_date = %end_date,
                "`Lease` ends before it starts"
            );
        }

        let mut lease = Lease::new(
            lease_id,
            property_id,
            tenant_id,
            start_date,
            end_date,
            cycle,
        );
        lease.activate().map_err(|e| tracerr::new!(E::from(e)))?;

        property.is_available = false;
        tenant.add_lease(lease.id.clone());
        _ = self.leases.insert(lease.id.clone(), lease.clone());

        log::info!(
            lease_id = %lease.id,
            property_id = %lease.property_id,
            tenant_id = %lease.tenant_id,
            "`Lease` created and activated"
        );

        Ok(lease)
    }
}

/// Error of [`LeaseProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// New [`Lease`] failed to activate.
    #[display("`Lease` failed to activate: {_0}")]
    #[from]
    Activation(lease::TransitionError),

    /// [`Lease`] with the provided ID exists already.
    #[display("`Lease(id: {_0})` already exists")]
    LeaseAlreadyExists(#[error(not(source))] lease::Id),

    /// [`Property`] is leased already.
    #[display("`Property(id: {_0})` is not available")]
    PropertyNotAvailable(#[error(not(source))] property::Id),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// [`Tenant`] with the provided ID does not exist.
    #[display("`Tenant(id: {_0})` does not exist")]
    TenantNotExists(#[error(not(source))] tenant::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::lease,
        fixture::{self, lease_id, property_id, tenant_id},
        Command as _,
    };

    use super::ExecutionError;

    #[test]
    fn creates_active_lease() {
        let mut svc = fixture::service();

        let lease = svc
            .execute_mut(fixture::lease_cmd("L1001", "A101", "T001"))
            .unwrap();

        assert_eq!(lease.status(), lease::Status::Active);
        assert_eq!(lease.outstanding_balance(), common::Money::ZERO);
        assert_eq!(svc.leases.get(&lease_id("L1001")), Some(&lease));
        assert!(!svc.properties[&property_id("A101")].is_available);
        assert!(svc.tenants[&tenant_id("T001")]
            .active_leases()
            .contains(&lease_id("L1001")));
    }

    #[test]
    fn refuses_unavailable_property() {
        let mut svc = fixture::service();
        _ = fixture::lease(&mut svc, "L1001", "A101", "T001");

        let err = svc
            .execute_mut(fixture::lease_cmd("L1002", "A101", "T002"))
            .unwrap_err();

        let err: &ExecutionError = err.as_ref();
        assert!(matches!(err, ExecutionError::PropertyNotAvailable(_)));
        assert!(!svc.leases.contains_key(&lease_id("L1002")));
        assert!(svc.tenants[&tenant_id("T002")].active_leases().is_empty());
    }

    #[test]
    fn refuses_unknown_property_or_tenant() {
        let mut svc = fixture::service();

        let err = svc
            .execute_mut(fixture::lease_cmd("L1001", "X999", "T001"))
            .unwrap_err();
        let err: &ExecutionError = err.as_ref();
        assert!(matches!(err, ExecutionError::PropertyNotExists(_)));

        let err = svc
            .execute_mut(fixture::lease_cmd("L1001", "A101", "T999"))
            .unwrap_err();
        let err: &ExecutionError = err.as_ref();
        assert!(matches!(err, ExecutionError::TenantNotExists(_)));

        assert!(svc.leases.is_empty());
        assert!(svc.properties[&property_id("A101")].is_available);
    }

    #[test]
    fn refuses_duplicate_lease_id() {
        let mut svc = fixture::service();
        _ = fixture::lease(&mut svc, "L1001", "A101", "T001");

        let err = svc
            .execute_mut(fixture::lease_cmd("L1001", "H201", "T002"))
            .unwrap_err();

        let err: &ExecutionError = err.as_ref();
        assert!(matches!(err, ExecutionError::LeaseAlreadyExists(_)));
        assert_eq!(
            svc.leases[&lease_id("L1001")].property_id,
            property_id("A101"),
        );
        assert!(svc.properties[&property_id("H201")].is_available);
        assert!(svc.tenants[&tenant_id("T002")].active_leases().is_empty());
    }

    #[test]
    fn accepts_reversed_dates() {
        let mut svc = fixture::service();
        let mut cmd = fixture::lease_cmd("L1001", "A101", "T001");
        cmd.end_date = lease::EndDate::from_calendar(2024, 1, 1).unwrap();

        let lease = svc.execute_mut(cmd).unwrap();

        assert!(lease.is_active());
    }
}
