//! [`Query`] collection related to the multiple [`Property`]s.

use common::operations::By;

use crate::domain::Property;
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries a list of all [`Property`]s.
pub type List = StorageQuery<By<Vec<Property>, ()>>;
