//! [`MonthlyCharges`] definition.

use std::convert::Infallible;

use common::Money;

#[cfg(doc)]
use crate::domain::Property;
use crate::{Query, Service};

/// [`Query`] summing up [`Property::monthly_charge()`]s of all the
/// [`Property`]s, whether leased or not.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MonthlyCharges;

impl Query<MonthlyCharges> for Service {
    type Ok = Money;
    type Err = Infallible;

    fn execute(&self, _: MonthlyCharges) -> Result<Self::Ok, Self::Err> {
        Ok(self.properties.values().map(|p| p.monthly_charge()).sum())
    }
}
