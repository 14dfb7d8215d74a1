//! [`Query`] collection related to a single [`Property`].

use common::operations::By;

use crate::domain::{property, Property};
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries a [`Property`] by its [`property::Id`].
pub type ById = StorageQuery<By<Option<Property>, property::Id>>;
