//! Report [`Query`] definitions.
//!
//! [`Query`]: crate::Query

pub mod income;
pub mod monthly_charges;
pub mod occupancy;
pub mod statement;

pub use self::{
    income::Income, monthly_charges::MonthlyCharges, occupancy::Occupancy,
    statement::Statement,
};
