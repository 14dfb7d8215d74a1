//! Human-readable views of the [`service`] entities and reports.

use std::fmt;

use itertools::Itertools as _;
use service::{
    domain::{property::Details, Lease, Property, Tenant},
    query::report,
};

/// [`fmt::Display`]able view of a `T`ype.
#[derive(Debug)]
pub struct View<'a, T>(pub &'a T);

impl fmt::Display for View<'_, Property> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Property {
            id,
            address,
            rent,
            is_available,
            details,
        } = self.0;

        match details {
            Details::Apartment(apartment) => write!(
                f,
                "[Apartment] {id} | {address} | Rent: {rent} | HOA: {} | \
                 Floor: {} | Available: {is_available}",
                apartment.hoa_fee, apartment.floor,
            ),
            Details::House(house) => write!(
                f,
                "[House] {id} | {address} | Rent: {rent} | YardFee: {} | \
                 Garage: {} | Available: {is_available}",
                house.yard_maintenance_fee, house.has_garage,
            ),
        }
    }
}

impl fmt::Display for View<'_, Tenant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenant = self.0;

        write!(
            f,
            "Tenant {} ({}) Contact: {} Deposit: {} ActiveLeases: [{}]",
            tenant.id,
            tenant.name,
            tenant.contact,
            tenant.deposit(),
            tenant.active_leases().iter().format(", "),
        )
    }
}

impl fmt::Display for View<'_, Lease> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lease = self.0;

        write!(
            f,
            "Lease {} | Property: {} | Tenant: {} | {} -> {} | Cycle: {} | \
             Status: {} | O/S: {}",
            lease.id,
            lease.property_id,
            lease.tenant_id,
            lease.start_date,
            lease.end_date,
            lease.cycle,
            lease.status(),
            lease.outstanding_balance(),
        )
    }
}

impl fmt::Display for View<'_, report::occupancy::Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report::occupancy::Output {
            total,
            occupied,
            available,
        } = self.0;

        write!(
            f,
            "Occupancy: {occupied}/{total} occupied, {available} available",
        )
    }
}

impl fmt::Display for View<'_, report::statement::Output> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report::statement::Output { tenant, leases } = self.0;

        write!(f, "--- Statement for {} ---", tenant.name)?;
        for lease in leases {
            write!(f, "\n{}", View(lease))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use service::{
        domain::{
            lease,
            property::{self, House},
            tenant, Lease, Property, Tenant,
        },
        query::report,
    };

    use super::View;

    #[test]
    fn renders_house() {
        let property = Property::new(
            property::Id::new("H202").unwrap(),
            property::Address::new("9 Lake View, Madurai").unwrap(),
            Money::from_units(18_000),
            House {
                yard_maintenance_fee: Money::from_units(900),
                has_garage: false,
            },
        );

        assert_eq!(
            View(&property).to_string(),
            "[House] H202 | 9 Lake View, Madurai | Rent: 18000.00 | \
             YardFee: 900.00 | Garage: false | Available: true",
        );
    }

    #[test]
    fn renders_tenant_with_lease() {
        let mut tenant = Tenant::new(
            tenant::Id::new("T001").unwrap(),
            tenant::Name::new("Ananya").unwrap(),
            tenant::Contact::new("+91-98765-43210").unwrap(),
            Money::from_units(24_000),
        );
        tenant.add_lease(lease::Id::new("L1001").unwrap());

        assert_eq!(
            View(&tenant).to_string(),
            "Tenant T001 (Ananya) Contact: +91-98765-43210 Deposit: 24000.00 \
             ActiveLeases: [L1001]",
        );
    }

    #[test]
    fn renders_lease() {
        let mut lease = Lease::new(
            lease::Id::new("L1001").unwrap(),
            property::Id::new("A101").unwrap(),
            tenant::Id::new("T001").unwrap(),
            lease::StartDate::from_calendar(2025, 9, 1).unwrap(),
            lease::EndDate::from_calendar(2026, 8, 31).unwrap(),
            lease::Cycle::new("MONTHLY").unwrap(),
        );
        lease.activate().unwrap();

        assert_eq!(
            View(&lease).to_string(),
            "Lease L1001 | Property: A101 | Tenant: T001 | \
             2025-09-01 -> 2026-08-31 | Cycle: MONTHLY | Status: ACTIVE | \
             O/S: 0.00",
        );
    }

    #[test]
    fn renders_occupancy() {
        let output = report::occupancy::Output {
            total: 4,
            occupied: 1,
            available: 3,
        };

        assert_eq!(
            View(&output).to_string(),
            "Occupancy: 1/4 occupied, 3 available",
        );
    }
}
