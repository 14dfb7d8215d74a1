//! Shared fixtures for tests.

use common::Money;

use crate::{
    command::{AddProperty, AddTenant, LeaseProperty},
    domain::{
        lease,
        property::{self, Apartment, House},
        tenant, Lease,
    },
    Command as _, Service,
};

/// Creates a [`Service`] holding:
/// - `A101` apartment for `12000` (HOA `800`);
/// - `H201` house for `20000` (yard fee `1200`);
/// - `T001` and `T002` tenants.
pub(crate) fn service() -> Service {
    let mut svc = Service::default();
    _ = svc
        .execute_mut(AddProperty {
            id: property_id("A101"),
            address: property::Address::new("12B MG Road, Chennai").unwrap(),
            rent: Money::from_units(12_000),
            details: Apartment {
                hoa_fee: Money::from_units(800),
                floor: 3,
            }
            .into(),
        })
        .unwrap();
    _ = svc
        .execute_mut(AddProperty {
            id: property_id("H201"),
            address: property::Address::new("7 Green St, Coimbatore").unwrap(),
            rent: Money::from_units(20_000),
            details: House {
                yard_maintenance_fee: Money::from_units(1_200),
                has_garage: true,
            }
            .into(),
        })
        .unwrap();
    for (id, name, deposit) in
        [("T001", "Ananya", 24_000), ("T002", "Rohan", 18_000)]
    {
        _ = svc
            .execute_mut(AddTenant {
                id: tenant_id(id),
                name: tenant::Name::new(name).unwrap(),
                contact: tenant::Contact::new("+91-98765-43210").unwrap(),
                deposit: Money::from_units(deposit),
            })
            .unwrap();
    }
    svc
}

/// Creates a [`service()`] having `L1001` (`A101` to `T001`) and `L1002`
/// (`H201` to `T002`) active [`Lease`]s.
pub(crate) fn leased_service() -> Service {
    let mut svc = service();
    _ = lease(&mut svc, "L1001", "A101", "T001");
    _ = lease(&mut svc, "L1002", "H201", "T002");
    svc
}

/// Leases the [`Property`] to the [`Tenant`] for a year.
///
/// [`Property`]: crate::domain::Property
/// [`Tenant`]: crate::domain::Tenant
pub(crate) fn lease(
    svc: &mut Service,
    lease: &str,
    property: &str,
    tenant: &str,
) -> Lease {
    svc.execute_mut(lease_cmd(lease, property, tenant)).unwrap()
}

/// Creates a [`LeaseProperty`] [`Command`] for a year.
///
/// [`Command`]: crate::Command
pub(crate) fn lease_cmd(
    lease: &str,
    property: &str,
    tenant: &str,
) -> LeaseProperty {
    LeaseProperty {
        lease_id: lease_id(lease),
        property_id: property_id(property),
        tenant_id: tenant_id(tenant),
        start_date: lease::StartDate::from_calendar(2025, 9, 1).unwrap(),
        end_date: lease::EndDate::from_calendar(2026, 8, 31).unwrap(),
        cycle: lease::Cycle::new("MONTHLY").unwrap(),
    }
}

pub(crate) fn property_id(id: &str) -> property::Id {
    property::Id::new(id).unwrap()
}

pub(crate) fn tenant_id(id: &str) -> tenant::Id {
    tenant::Id::new(id).unwrap()
}

pub(crate) fn lease_id(id: &str) -> lease::Id {
    lease::Id::new(id).unwrap()
}

/// Returns the largest representable [`Money`] amount.
pub(crate) fn max_money() -> Money {
    "79228162514264337593543950335".parse().unwrap()
}
