//! [`Line`] definitions.

use std::str::FromStr;

use common::Money;
use service::domain::{lease, tenant};

use crate::{define_error, Error};

define_error! {
    enum ParseError {
        #[code = "UNKNOWN_COMMAND"]
        #[message = "Unknown command, type `help` to see the available ones"]
        UnknownCommand,

        #[code = "MISSING_ARGUMENT"]
        #[message = "Command is missing its arguments, type `help` to see \
                     its usage"]
        MissingArgument,

        #[code = "INVALID_NUMBER"]
        #[message = "Provided argument is not a valid number"]
        InvalidNumber,
    }
}

/// Single command entered into the console.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// Lists all the known [`Property`]s.
    ///
    /// [`Property`]: service::domain::Property
    ListProperties,

    /// Lists all the known [`Tenant`]s.
    ///
    /// [`Tenant`]: service::domain::Tenant
    ListTenants,

    /// Lists all the [`Lease`]s.
    ///
    /// [`Lease`]: service::domain::Lease
    ListLeases,

    /// Collects the full rent of a [`Lease`].
    ///
    /// [`Lease`]: service::domain::Lease
    Collect(lease::Id),

    /// Collects a partial payment of a [`Lease`].
    ///
    /// [`Lease`]: service::domain::Lease
    CollectPartial(lease::Id, Money),

    /// Collects an overdue rent of a [`Lease`] along with a late fee.
    ///
    /// [`Lease`]: service::domain::Lease
    CollectLate(lease::Id, u32),

    /// Terminates a [`Lease`].
    ///
    /// [`Lease`]: service::domain::Lease
    Terminate(lease::Id),

    /// Prints a statement of a [`Tenant`].
    ///
    /// [`Tenant`]: service::domain::Tenant
    Statement(tenant::Id),

    /// Prints the income collected in the current period.
    Income,

    /// Prints the occupancy report.
    Occupancy,

    /// Prints the total monthly charges across all the [`Property`]s.
    ///
    /// [`Property`]: service::domain::Property
    Charges,

    /// Prints the available commands.
    Help,

    /// Quits the console.
    Exit,
}

impl Line {
    /// Usage of all the [`Line`]s.
    pub const USAGE: &'static str = "Options: listProps | listTenants | \
        listLeases | collect <leaseId> | collectPartial <leaseId> <amt> | \
        collectLate <leaseId> <days> | terminate <leaseId> | \
        statement <tenantId> | income | occupancy | charges | help | exit";
}

impl FromStr for Line {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(ParseError::UnknownCommand.into());
        };
        let mut arg = || {
            parts
                .next()
                .ok_or_else(|| Error::from(ParseError::MissingArgument))
        };

        Ok(match name {
            "listProps" => Self::ListProperties,
            "listTenants" => Self::ListTenants,
            "listLeases" => Self::ListLeases,
            "collect" => Self::Collect(id(arg()?)?),
            "collectPartial" => {
                let lease_id = id(arg()?)?;
                Self::CollectPartial(lease_id, number(arg()?)?)
            }
            "collectLate" => {
                let lease_id = id(arg()?)?;
                Self::CollectLate(lease_id, number(arg()?)?)
            }
            "terminate" => Self::Terminate(id(arg()?)?),
            "statement" => Self::Statement(id(arg()?)?),
            "income" => Self::Income,
            "occupancy" => Self::Occupancy,
            "charges" => Self::Charges,
            "help" => Self::Help,
            _ if name.eq_ignore_ascii_case("exit") => Self::Exit,
            _ => return Err(ParseError::UnknownCommand.into()),
        })
    }
}

/// Parses an entity ID argument.
fn id<T: FromStr<Err = &'static str>>(arg: &str) -> Result<T, Error> {
    arg.parse()
        .map_err(|e| Error::new(Error::INVALID_ARGUMENT, &e))
}

/// Parses a numeric argument.
fn number<T: FromStr>(arg: &str) -> Result<T, Error> {
    arg.parse().map_err(|_| ParseError::InvalidNumber.into())
}
