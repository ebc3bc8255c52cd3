//! Precondition failures shared by [`crate::Alternative`] and [`crate::Optional`]

use log::error;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("cannot construct `{variant}` from an absent value")]
    /// A variant that must hold a value was handed nothing
    InvariantViolation { variant: &'static str },

    #[error("no value present")]
    /// Unchecked extraction from an empty container
    EmptyValueAccess,
}

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Report a violated precondition and abort the current thread.
///
/// Used by the panicking entry points (`require_*`, [`crate::Optional::get`]);
/// the non-panicking `try_*` forms return the same error as a value instead.
#[track_caller]
pub(crate) fn violated(err: ContainerError) -> ! {
    error!("{}", err);
    panic!("{}", err)
}
