//! Domain definitions.

pub mod lease;
pub mod property;
pub mod tenant;

pub use self::{lease::Lease, property::Property, tenant::Tenant};
