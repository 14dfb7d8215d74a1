//! [`Query`] definition.

pub mod lease;
pub mod leases;
pub mod properties;
pub mod property;
pub mod report;
pub mod tenant;
pub mod tenants;

use std::convert::Infallible;

use common::operations::By;

use crate::{
    domain::{self, Lease, Property, Tenant},
    Service,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] reading a `T`ype from the [`Service`] storage.
#[derive(Clone, Copy, Debug)]
#[expect(clippy::module_name_repetitions, reason = "more readable")]
pub struct StorageQuery<T>(T);

impl<W, B> StorageQuery<By<W, B>> {
    /// Creates a new [`StorageQuery`] reading a `W` by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

/// Implements [`StorageQuery`]s for the entity stored in the provided
/// [`Service`] field:
/// - `Option<$entity>` by its ID;
/// - `Vec<$entity>` of all the stored ones, ordered by ID.
macro_rules! impl_storage_query {
    ($entity:ty, $id:ty, $field:ident) => {
        impl Query<StorageQuery<By<Option<$entity>, $id>>> for Service {
            type Ok = Option<$entity>;
            type Err = Infallible;

            fn execute(
                &self,
                StorageQuery(by): StorageQuery<By<Option<$entity>, $id>>,
            ) -> Result<Self::Ok, Self::Err> {
                Ok(self.$field.get(by.as_inner()).cloned())
            }
        }

        impl Query<StorageQuery<By<Vec<$entity>, ()>>> for Service {
            type Ok = Vec<$entity>;
            type Err = Infallible;

            fn execute(
                &self,
                _: StorageQuery<By<Vec<$entity>, ()>>,
            ) -> Result<Self::Ok, Self::Err> {
                Ok(self.$field.values().cloned().collect())
            }
        }
    };
}

impl_storage_query!(Property, domain::property::Id, properties);
impl_storage_query!(Tenant, domain::tenant::Id, tenants);
impl_storage_query!(Lease, domain::lease::Id, leases);
