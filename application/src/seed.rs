//! Sample data loaded into a fresh [`Service`].

use std::{fmt, str::FromStr};

use common::Money;
use service::{
    command::{AddProperty, AddTenant, LeaseProperty},
    domain::property::{Apartment, Details, House},
    Command as _, Service,
};
use tracing as log;

use crate::{AsError, Error};

/// Sample [`Property`]s: `(id, address, rent, details)`.
///
/// [`Property`]: service::domain::Property
const PROPERTIES: &[(&str, &str, i64, Sample)] = &[
    ("A101", "12B MG Road, Chennai", 12_000, Sample::Apartment(800, 3)),
    ("A102", "15A Anna Salai, Chennai", 15_000, Sample::Apartment(1_000, 6)),
    ("H201", "7 Green St, Coimbatore", 20_000, Sample::House(1_200, true)),
    ("H202", "9 Lake View, Madurai", 18_000, Sample::House(900, false)),
];

/// Sample [`Tenant`]s: `(id, name, contact, deposit)`.
///
/// [`Tenant`]: service::domain::Tenant
const TENANTS: &[(&str, &str, &str, i64)] = &[
    ("T001", "Ananya", "+91-98765-43210", 24_000),
    ("T002", "Rohan", "+91-91234-56789", 18_000),
];

/// Sample [`Lease`]s: `(id, property, tenant, start, end, cycle)`.
///
/// [`Lease`]: service::domain::Lease
const LEASES: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("L1001", "A101", "T001", "2025-09-01", "2026-08-31", "MONTHLY"),
    ("L1002", "H201", "T002", "2025-09-10", "2026-09-09", "MONTHLY"),
];

/// Kind-specific details of a sample [`Property`].
///
/// [`Property`]: service::domain::Property
#[derive(Clone, Copy, Debug)]
enum Sample {
    /// HOA fee and floor.
    Apartment(i64, i16),

    /// Yard maintenance fee and garage presence.
    House(i64, bool),
}

impl From<Sample> for Details {
    fn from(sample: Sample) -> Self {
        match sample {
            Sample::Apartment(hoa_fee, floor) => Apartment {
                hoa_fee: Money::from_units(hoa_fee),
                floor,
            }
            .into(),
            Sample::House(yard_fee, has_garage) => House {
                yard_maintenance_fee: Money::from_units(yard_fee),
                has_garage,
            }
            .into(),
        }
    }
}

/// Loads the sample [`Property`]s, [`Tenant`]s and [`Lease`]s into the
/// provided [`Service`].
///
/// # Errors
///
/// If any of the sample entities is rejected by the [`Service`] (e.g. it
/// already has an entity with the same ID).
///
/// [`Lease`]: service::domain::Lease
/// [`Property`]: service::domain::Property
/// [`Tenant`]: service::domain::Tenant
pub fn seed(service: &mut Service) -> Result<(), Error> {
    for &(id, address, rent, details) in PROPERTIES {
        _ = service
            .execute_mut(AddProperty {
                id: parse(id)?,
                address: parse(address)?,
                rent: Money::from_units(rent),
                details: details.into(),
            })
            .map_err(AsError::into_error)?;
    }
    for &(id, name, contact, deposit) in TENANTS {
        _ = service
            .execute_mut(AddTenant {
                id: parse(id)?,
                name: parse(name)?,
                contact: parse(contact)?,
                deposit: Money::from_units(deposit),
            })
            .map_err(AsError::into_error)?;
    }
    for &(id, property, tenant, start, end, cycle) in LEASES {
        _ = service
            .execute_mut(LeaseProperty {
                lease_id: parse(id)?,
                property_id: parse(property)?,
                tenant_id: parse(tenant)?,
                start_date: parse(start)?,
                end_date: parse(end)?,
                cycle: parse(cycle)?,
            })
            .map_err(AsError::into_error)?;
    }

    log::info!(
        properties = PROPERTIES.len(),
        tenants = TENANTS.len(),
        leases = LEASES.len(),
        "Sample data loaded"
    );

    Ok(())
}

/// Parses a sample value.
fn parse<T>(value: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .parse()
        .map_err(|e| Error::internal(&format!("invalid sample `{value}`: {e}")))
}
