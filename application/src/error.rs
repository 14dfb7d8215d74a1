//! [`Error`]-related definitions.

use std::{convert::Infallible, fmt};

use derive_more::Error as StdError;
use itertools::Itertools as _;
use service::{command, query};
use tracerr::{Trace, Traced};

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// Console [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Code of a referenced entity being absent.
    pub const NOT_FOUND: Code = "NOT_FOUND";

    /// Code of an entity being in a state not allowing the operation.
    pub const INVALID_STATE: Code = "INVALID_STATE";

    /// Code of an operation argument not being acceptable.
    pub const INVALID_ARGUMENT: Code = "INVALID_ARGUMENT";

    /// Code of a resource being occupied by someone else.
    pub const RESOURCE_CONFLICT: Code = "RESOURCE_CONFLICT";

    /// Creates a new [`Error`] with the provided [`Code`] and message.
    #[must_use]
    pub fn new(code: Code, msg: &impl ToString) -> Self {
        Self {
            code,
            message: msg.to_string(),
            backtrace: None,
        }
    }

    /// Create a new [`Error`] representing an internal error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self::new("INTERNAL_ERROR", msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("\n{trace}"))),
        )
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for Infallible {
    fn try_as_error(&self) -> Option<Error> {
        match *self {}
    }
}

impl AsError for command::add_property::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::PropertyAlreadyExists(_) => {
                Some(Error::new(Error::RESOURCE_CONFLICT, self))
            }
        }
    }
}

impl AsError for command::add_tenant::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::TenantAlreadyExists(_) => {
                Some(Error::new(Error::RESOURCE_CONFLICT, self))
            }
        }
    }
}

impl AsError for command::lease_property::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Activation(_) => None,
            Self::LeaseAlreadyExists(_) | Self::PropertyNotAvailable(_) => {
                Some(Error::new(Error::RESOURCE_CONFLICT, self))
            }
            Self::PropertyNotExists(_) | Self::TenantNotExists(_) => {
                Some(Error::new(Error::NOT_FOUND, self))
            }
        }
    }
}

impl AsError for command::collect_full_rent::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::LeaseNotActive { .. } => {
                Some(Error::new(Error::INVALID_STATE, self))
            }
            Self::LeaseNotExists(_) | Self::PropertyNotExists(_) => {
                Some(Error::new(Error::NOT_FOUND, self))
            }
            Self::AmountOverflow(_) | Self::Payment(_) => {
                Some(Error::new(Error::INVALID_ARGUMENT, self))
            }
        }
    }
}

impl AsError for command::collect_partial_payment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::LeaseNotActive { .. } => {
                Some(Error::new(Error::INVALID_STATE, self))
            }
            Self::LeaseNotExists(_) => Some(Error::new(Error::NOT_FOUND, self)),
            Self::AmountOverflow(_) | Self::Payment(_) => {
                Some(Error::new(Error::INVALID_ARGUMENT, self))
            }
        }
    }
}

impl AsError for command::collect_with_late_fee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::LeaseNotActive { .. } => {
                Some(Error::new(Error::INVALID_STATE, self))
            }
            Self::LeaseNotExists(_) | Self::PropertyNotExists(_) => {
                Some(Error::new(Error::NOT_FOUND, self))
            }
            Self::AmountOverflow(_) | Self::Payment(_) => {
                Some(Error::new(Error::INVALID_ARGUMENT, self))
            }
        }
    }
}

impl AsError for command::terminate_lease::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::LeaseNotActive { .. } => {
                Some(Error::new(Error::INVALID_STATE, self))
            }
            Self::LeaseNotExists(_) => Some(Error::new(Error::NOT_FOUND, self)),
        }
    }
}

impl AsError for query::report::statement::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::TenantNotExists(_) => {
                Some(Error::new(Error::NOT_FOUND, self))
            }
        }
    }
}
