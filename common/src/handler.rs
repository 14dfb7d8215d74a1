//! [`Handler`] abstractions.

/// Executable handler observing its state.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the execution fails.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}

/// Executable handler mutating its state.
pub trait HandlerMut<Args = ()> {
    /// Type of successful [`HandlerMut`] result.
    type Ok;

    /// Type of this [`HandlerMut`] error.
    type Err;

    /// Executes this [`HandlerMut`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the execution fails. A failed execution leaves the state
    /// untouched.
    fn execute_mut(&mut self, args: Args) -> Result<Self::Ok, Self::Err>;
}
