//! [`Query`] collection related to the multiple [`Tenant`]s.

use common::operations::By;

use crate::domain::Tenant;
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries a list of all [`Tenant`]s.
pub type List = StorageQuery<By<Vec<Tenant>, ()>>;
