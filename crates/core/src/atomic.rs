//! Transparent wrapper for mapping keys and values observed during a diff.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// A key or value captured by the diff layer.
///
/// `Atomic` adds nothing to the value it holds: equality, ordering and hashing
/// are all delegated to `T`, so a box hashes exactly like its raw value and can
/// be looked up in a `HashSet<Atomic<T>>` with a plain `&T` (see the `Borrow`
/// impl). Types with a hand-written `PartialEq` keep that equality.
///
/// Boxes are immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atomic<T> {
    value: T,
}

impl<T> Atomic<T> {
    /// Wrap a present value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Wrap a value that may be absent.
    ///
    /// Fails with [`DiffError::InvalidArgument`] when `value` is `None`.
    pub fn try_new(value: Option<T>) -> DiffResult<Self> {
        match value {
            Some(value) => Ok(Self::new(value)),
            None => {
                tracing::debug!("rejected absent value for atomic wrapper");
                Err(DiffError::invalid_argument("atomic value must be present"))
            }
        }
    }

    /// The wrapped value, unchanged.
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for Atomic<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Borrow<T> for Atomic<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Atomic<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<T: fmt::Display> fmt::Display for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
