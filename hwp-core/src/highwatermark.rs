// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::{HwpError, Result};
use core::fmt;
use core::num::NonZeroUsize;

/// Concurrency ceiling used when the caller does not provide one.
pub const DEFAULT_HIGHWATERMARK: usize = 16;

/// Maximum number of operations dispatched but not yet delivered.
///
/// A highwatermark is always positive. Construct it with [`Highwatermark::new`]
/// or resolve an optional caller value with [`Highwatermark::resolve`].
///
/// # Examples
///
/// ```
/// use hwp_core::Highwatermark;
///
/// assert_eq!(Highwatermark::default().get(), 16);
/// assert_eq!(Highwatermark::resolve(Some(5)).unwrap().get(), 5);
/// assert!(Highwatermark::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Highwatermark(NonZeroUsize);

impl Highwatermark {
    /// Validate a caller supplied ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`HwpError::InvalidArgument`] when `value` is zero.
    pub fn new(value: usize) -> Result<Self> {
        NonZeroUsize::new(value).map(Self).ok_or_else(|| {
            HwpError::invalid_argument(format!(
                "highwatermark must be a positive integer, got {value}"
            ))
        })
    }

    /// Resolve an optional ceiling, falling back to [`DEFAULT_HIGHWATERMARK`].
    ///
    /// # Errors
    ///
    /// Returns [`HwpError::InvalidArgument`] when `value` is `Some(0)`.
    pub fn resolve(value: Option<usize>) -> Result<Self> {
        value.map_or_else(|| Ok(Self::default()), Self::new)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Highwatermark {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_HIGHWATERMARK).unwrap_or(NonZeroUsize::MIN))
    }
}

impl From<NonZeroUsize> for Highwatermark {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for Highwatermark {
    type Error = HwpError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Highwatermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sixteen() {
        assert_eq!(Highwatermark::default().get(), DEFAULT_HIGHWATERMARK);
        assert_eq!(Highwatermark::resolve(None).unwrap(), Highwatermark::default());
    }

    #[test]
    fn zero_is_rejected() {
        let error = Highwatermark::new(0).unwrap_err();
        assert!(matches!(error, HwpError::InvalidArgument { .. }));
        assert!(Highwatermark::resolve(Some(0)).is_err());
        assert!(Highwatermark::try_from(0usize).is_err());
    }

    #[test]
    fn positive_values_are_kept() {
        assert_eq!(Highwatermark::new(1).unwrap().get(), 1);
        assert_eq!(Highwatermark::resolve(Some(5)).unwrap().get(), 5);
        assert_eq!(Highwatermark::new(7).unwrap().to_string(), "7");
    }
}
