//! A value that is either present or absent.

use log::debug;

use crate::error::{violated, ContainerError, Result};
use crate::{IntoSeq, Seq};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    Present(T),
    Empty,
}

impl<T> Optional<T> {
    pub fn present(value: T) -> Self {
        Self::Present(value)
    }

    pub fn empty() -> Self {
        Self::Empty
    }

    /// Same as [`Optional::empty`]
    pub fn none() -> Self {
        Self::Empty
    }

    /// Lenient constructor: a missing value becomes `Empty`.
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(t) => Self::Present(t),
            None => Self::Empty,
        }
    }

    /// Strict constructor: a missing value is an error, not `Empty`.
    pub fn try_present(value: Option<T>) -> Result<Self> {
        match value {
            Some(t) => Ok(Self::Present(t)),
            None => {
                debug!("Rejected absent payload for Present");
                Err(ContainerError::InvariantViolation { variant: "Present" })
            }
        }
    }

    /// # Panics
    /// If `value` is `None`.
    #[track_caller]
    pub fn require_present(value: Option<T>) -> Self {
        match Self::try_present(value) {
            Ok(opt) => opt,
            Err(e) => violated(e),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(t) => Optional::Present(t),
            Self::Empty => Optional::Empty,
        }
    }

    /// Take the held value out.
    ///
    /// Only for code that has already established presence; everything else
    /// should go through [`Optional::or_else`] or [`Optional::map`].
    ///
    /// # Panics
    /// On `Empty`.
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Present(t) => t,
            Self::Empty => violated(ContainerError::EmptyValueAccess),
        }
    }

    pub fn try_get(self) -> Result<T> {
        match self {
            Self::Present(t) => Ok(t),
            Self::Empty => Err(ContainerError::EmptyValueAccess),
        }
    }

    /// Run `action` on the held value, if there is one.
    pub fn if_present(&self, action: impl FnOnce(&T)) {
        if let Self::Present(t) = self {
            action(t)
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Self::Present(t) => Optional::Present(f(t)),
            Self::Empty => Optional::Empty,
        }
    }

    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Self::Present(t) => f(t),
            Self::Empty => Optional::Empty,
        }
    }

    pub fn or_else(self, default: T) -> T {
        match self {
            Self::Present(t) => t,
            Self::Empty => default,
        }
    }

    /// Like [`Optional::or_else`], but `supplier` is only called when empty.
    pub fn or_else_compute(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Self::Present(t) => t,
            Self::Empty => supplier(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(t) => Some(t),
            Self::Empty => None,
        }
    }

    pub fn to_sequence(&self) -> Seq<'_, T> {
        self.as_ref().into_option().into_iter()
    }

    pub fn into_sequence(self) -> IntoSeq<T> {
        self.into_option().into_iter()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoSeq<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_sequence()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Seq<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_sequence()
    }
}
