//! Error types for the utilities.

use thiserror::Error;

/// Errors from [`crate::fib::FibCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FibError {
    /// The Fibonacci number at this index does not fit in a `u128`.
    #[error("fibonacci({n}) overflows u128")]
    Overflow {
        /// First index whose value overflowed.
        n: u32,
    },
}

/// Errors from assistant bot commands.
///
/// The `Display` text is the reply shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    /// A command needing a name and a phone got a different number of arguments.
    #[error("Give me name and phone please.")]
    NameAndPhone,

    /// No contact is stored under the name.
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// A command needing an argument got none.
    #[error("Enter the argument for the command")]
    MissingArgument,
}
