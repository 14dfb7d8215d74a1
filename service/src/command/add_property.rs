//! [`Command`] for adding a new [`Property`].

use common::Money;
use derive_more::{Display, Error};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, Property},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Property`].
#[derive(Clone, Debug)]
pub struct AddProperty {
    /// ID of a new [`Property`].
    pub id: property::Id,

    /// [`property::Address`] of a new [`Property`].
    pub address: property::Address,

    /// Monthly rent of a new [`Property`].
    pub rent: Money,

    /// [`property::Details`] of a new [`Property`].
    pub details: property::Details,
}

impl Command<AddProperty> for Service {
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    fn execute_mut(&mut self, cmd: AddProperty) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddProperty {
            id,
            address,
            rent,
            details,
        } = cmd;

        if self.properties.contains_key(&id) {
            return Err(tracerr::new!(E::PropertyAlreadyExists(id)));
        }

        let property = Property::new(id, address, rent, details);
        log::info!(
            property_id = %property.id,
            kind = %property.kind(),
            rent = %property.rent,
            "`Property` added"
        );
        _ = self
            .properties
            .insert(property.id.clone(), property.clone());

        Ok(property)
    }
}

/// Error of [`AddProperty`] [`Command`] execution.
#[derive(Debug, Display, Error)]
pub enum ExecutionError {
    /// [`Property`] with the provided ID exists already.
    #[display("`Property(id: {_0})` already exists")]
    PropertyAlreadyExists(#[error(not(source))] property::Id),
}
