//! [`Query`] collection related to a single [`Tenant`].

use common::operations::By;

use crate::domain::{tenant, Tenant};
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries a [`Tenant`] by its [`tenant::Id`].
pub type ById = StorageQuery<By<Option<Tenant>, tenant::Id>>;
