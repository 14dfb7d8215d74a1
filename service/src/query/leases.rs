//! [`Query`] collection related to the multiple [`Lease`]s.

use common::operations::By;

use crate::domain::Lease;
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries a list of all [`Lease`]s, including the terminated ones.
pub type List = StorageQuery<By<Vec<Lease>, ()>>;
