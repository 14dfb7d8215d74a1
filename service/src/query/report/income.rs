//! [`Income`] definition.

use std::convert::Infallible;

use common::Money;

use crate::{Query, Service};

/// [`Query`] of the total income collected in the current period.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Income;

impl Query<Income> for Service {
    type Ok = Money;
    type Err = Infallible;

    fn execute(&self, _: Income) -> Result<Self::Ok, Self::Err> {
        Ok(self.income)
    }
}
