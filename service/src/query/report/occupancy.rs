//! [`Occupancy`] definition.

use std::convert::Infallible;

#[cfg(doc)]
use crate::domain::Property;
use crate::{Query, Service};

/// [`Query`] counting occupied and available [`Property`]s.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Occupancy;

/// Output of the [`Occupancy`] [`Query`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Output {
    /// Total number of [`Property`]s.
    pub total: usize,

    /// Number of [`Property`]s being leased.
    pub occupied: usize,

    /// Number of [`Property`]s available for leasing.
    pub available: usize,
}

impl Query<Occupancy> for Service {
    type Ok = Output;
    type Err = Infallible;

    fn execute(&self, _: Occupancy) -> Result<Self::Ok, Self::Err> {
        let total = self.properties.len();
        let available =
            self.properties.values().filter(|p| p.is_available).count();

        Ok(Output {
            total,
            occupied: total - available,
            available,
        })
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        command::TerminateLease,
        fixture::{self, lease_id},
        Command as _, Query as _, Service,
    };

    use super::{Occupancy, Output};

    #[test]
    fn counts_nothing_when_empty() {
        let svc = Service::default();

        assert_eq!(svc.execute(Occupancy).unwrap(), Output::default());
    }

    #[test]
    fn follows_lease_lifecycle() {
        let mut svc = fixture::service();
        assert_eq!(
            svc.execute(Occupancy).unwrap(),
            Output {
                total: 2,
                occupied: 0,
                available: 2,
            },
        );

        _ = fixture::lease(&mut svc, "L1001", "A101", "T001");
        assert_eq!(
            svc.execute(Occupancy).unwrap(),
            Output {
                total: 2,
                occupied: 1,
                available: 1,
            },
        );

        _ = svc
            .execute_mut(TerminateLease {
                lease_id: lease_id("L1001"),
            })
            .unwrap();
        assert_eq!(svc.execute(Occupancy).unwrap().occupied, 0);
    }
}
