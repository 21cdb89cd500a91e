// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the hwp pipeline.
//!
//! Every failure that can reach a consumer of an ordered output is a [`HwpError`].
//! Failures raised by user code (the transform or the source) are carried unmodified
//! as the error's [`source`](std::error::Error::source), tagged with the position of
//! the item they belong to.
//!
//! # Examples
//!
//! ```
//! use hwp_core::{HwpError, Result};
//!
//! fn validate(highwatermark: usize) -> Result<usize> {
//!     if highwatermark == 0 {
//!         return Err(HwpError::invalid_argument("highwatermark must be positive"));
//!     }
//!     Ok(highwatermark)
//! }
//!
//! assert!(validate(0).is_err());
//! ```

use std::error::Error;

/// Boxed user error, as produced by a transform or a source.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Root error type for all hwp operations.
#[derive(Debug, thiserror::Error)]
pub enum HwpError {
    /// A call was made with arguments the pipeline cannot run with.
    ///
    /// Raised synchronously, before anything is pulled from the source.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// What was wrong with the call
        context: String,
    },

    /// The transform failed for the item at `position`.
    #[error("Transform failed at position {position}: {source}")]
    TransformFailure {
        /// Index of the item in the source sequence
        position: u64,
        /// The error returned by the transform
        #[source]
        source: BoxError,
    },

    /// The transform panicked while processing the item at `position`.
    #[error("Transform panicked at position {position}: {message}")]
    TransformPanic {
        /// Index of the item in the source sequence
        position: u64,
        /// Panic payload, when it was a string
        message: String,
    },

    /// The source failed while being pulled for the item at `position`.
    #[error("Source failed at position {position}: {source}")]
    SourceFailure {
        /// Position the failed pull would have occupied
        position: u64,
        /// The error produced by the source
        #[source]
        source: BoxError,
    },
}

impl HwpError {
    /// Create an invalid argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Wrap an error returned by the transform
    pub fn transform_failure(position: u64, error: impl Into<BoxError>) -> Self {
        Self::TransformFailure {
            position,
            source: error.into(),
        }
    }

    /// Wrap an error produced by the source
    pub fn source_failure(position: u64, error: impl Into<BoxError>) -> Self {
        Self::SourceFailure {
            position,
            source: error.into(),
        }
    }

    /// Position of the item the error belongs to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<u64> {
        match self {
            Self::InvalidArgument { .. } => None,
            Self::TransformFailure { position, .. }
            | Self::TransformPanic { position, .. }
            | Self::SourceFailure { position, .. } => Some(*position),
        }
    }

    #[must_use]
    pub const fn is_transform_failure(&self) -> bool {
        matches!(
            self,
            Self::TransformFailure { .. } | Self::TransformPanic { .. }
        )
    }

    #[must_use]
    pub const fn is_source_failure(&self) -> bool {
        matches!(self, Self::SourceFailure { .. })
    }

    /// Borrow the original user error as a concrete type.
    ///
    /// Returns `None` for errors that do not wrap a user error, or when the
    /// wrapped error is of a different type.
    ///
    /// ```
    /// use hwp_core::HwpError;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("kaboom")]
    /// struct Kaboom;
    ///
    /// let error = HwpError::transform_failure(3, Kaboom);
    /// assert!(error.downcast_source::<Kaboom>().is_some());
    /// assert_eq!(error.position(), Some(3));
    /// ```
    #[must_use]
    pub fn downcast_source<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::TransformFailure { source, .. } | Self::SourceFailure { source, .. } => {
                source.downcast_ref::<E>()
            }
            Self::InvalidArgument { .. } | Self::TransformPanic { .. } => None,
        }
    }
}

/// Specialized Result type for hwp operations
pub type Result<T> = std::result::Result<T, HwpError>;
