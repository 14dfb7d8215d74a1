//! [`Command`] definition.

pub mod add_property;
pub mod add_tenant;
pub mod collect_full_rent;
pub mod collect_partial_payment;
pub mod collect_with_late_fee;
pub mod lease_property;
pub mod terminate_lease;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::HandlerMut as Command;

pub use self::{
    add_property::AddProperty, add_tenant::AddTenant,
    collect_full_rent::CollectFullRent,
    collect_partial_payment::CollectPartialPayment,
    collect_with_late_fee::CollectWithLateFee, lease_property::LeaseProperty,
    terminate_lease::TerminateLease,
};
