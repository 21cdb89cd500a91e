// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::output::OrderedOutput;
use crate::pipeline;
use core::future::Future;
use futures::stream::Stream;
use hwp_core::{BoxError, Result};

/// Extension trait exposing the pipeline entry points as stream methods.
///
/// ```
/// use futures::{future, stream};
/// use hwp_exec::HighWaterExt;
///
/// # #[tokio::main]
/// # async fn main() -> hwp_core::Result<()> {
/// let doubled = stream::iter(0..42)
///     .collect_highwater(Some(5), |n: u64| future::ready(Ok::<_, std::io::Error>(n * 2)))
///     .await?;
///
/// assert_eq!(doubled, (0..42).map(|n| n * 2).collect::<Vec<_>>());
/// # Ok(())
/// # }
/// ```
pub trait HighWaterExt: Stream + Sized {
    /// Streaming form, see [`map_iterator`](crate::map_iterator).
    ///
    /// # Errors
    ///
    /// Returns [`HwpError::InvalidArgument`](hwp_core::HwpError::InvalidArgument) for a
    /// zero highwatermark or when no runtime is available.
    fn map_highwater<F, Fut, U, E>(
        self,
        highwatermark: Option<usize>,
        transform: F,
    ) -> Result<OrderedOutput<U>>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
        F: Fn(Self::Item) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
        U: Send + 'static;

    /// Eager form, see [`map`](crate::map).
    fn collect_highwater<F, Fut, U, E>(
        self,
        highwatermark: Option<usize>,
        transform: F,
    ) -> impl Future<Output = Result<Vec<U>>> + Send
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
        F: Fn(Self::Item) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
        U: Send + 'static;

    /// Effect-only form, see [`for_each`](crate::for_each).
    fn for_each_highwater<F, Fut, E>(
        self,
        highwatermark: Option<usize>,
        action: F,
    ) -> impl Future<Output = Result<u64>> + Send
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
        F: Fn(Self::Item) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static;
}

impl<S: Stream> HighWaterExt for S {
    fn map_highwater<F, Fut, U, E>(
        self,
        highwatermark: Option<usize>,
        transform: F,
    ) -> Result<OrderedOutput<U>>
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
        F: Fn(Self::Item) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
        U: Send + 'static,
    {
        pipeline::map_iterator(self, transform, highwatermark)
    }

    fn collect_highwater<F, Fut, U, E>(
        self,
        highwatermark: Option<usize>,
        transform: F,
    ) -> impl Future<Output = Result<Vec<U>>> + Send
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
        F: Fn(Self::Item) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
        U: Send + 'static,
    {
        pipeline::map(self, transform, highwatermark)
    }

    fn for_each_highwater<F, Fut, E>(
        self,
        highwatermark: Option<usize>,
        action: F,
    ) -> impl Future<Output = Result<u64>> + Send
    where
        Self: Send + 'static,
        Self::Item: Send + 'static,
        F: Fn(Self::Item) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        pipeline::for_each(self, action, highwatermark)
    }
}
