//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod query;

#[cfg(test)]
mod fixture;

use std::collections::BTreeMap;

use common::Money;
// Used in `define_kind!` expansions.
use strum as _;

use crate::domain::{lease, property, tenant, Lease, Property, Tenant};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`command::CollectWithLateFee`] configuration.
    pub late_fee: command::collect_with_late_fee::Config,
}

/// Domain service owning all the [`Property`]s, [`Tenant`]s and [`Lease`]s.
///
/// Every [`Command`] either applies completely or leaves this [`Service`]
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct Service {
    /// Configuration of this [`Service`].
    config: Config,

    /// All the known [`Property`]s.
    properties: BTreeMap<property::Id, Property>,

    /// All the known [`Tenant`]s.
    tenants: BTreeMap<tenant::Id, Tenant>,

    /// All the [`Lease`]s ever created, including terminated ones.
    leases: BTreeMap<lease::Id, Lease>,

    /// Total income collected in the current period.
    income: Money,
}

impl Service {
    /// Creates a new empty [`Service`] with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
