//! [`Query`] collection related to a single [`Lease`].

use common::operations::By;

use crate::domain::{lease, Lease};
#[cfg(doc)]
use crate::Query;

use super::StorageQuery;

/// Queries a [`Lease`] by its [`lease::Id`], regardless of its
/// [`lease::Status`].
pub type ById = StorageQuery<By<Option<Lease>, lease::Id>>;
