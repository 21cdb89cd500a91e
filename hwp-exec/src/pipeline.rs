// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Entry points: streaming ([`map_iterator`]) and eager ([`map`], [`for_each`]).
//!
//! Every entry point takes an optional highwatermark; `None` means
//! [`DEFAULT_HIGHWATERMARK`](hwp_core::DEFAULT_HIGHWATERMARK). Arguments are
//! validated before anything is pulled from the source.
//!
//! The eager forms start the pipeline when called, not when first polled: the
//! returned future only waits for the results. An invalid argument is detected at
//! call time and reported when the future is awaited.

use crate::accumulate;
use crate::output::OrderedOutput;
use crate::scheduler;
use crate::source::Source;
use core::future::Future;
use futures::stream::Stream;
use hwp_core::{BoxError, Highwatermark, Result};

/// Apply `transform` to every item of `source` with at most `highwatermark`
/// operations in flight, yielding results in source order.
///
/// # Errors
///
/// Returns [`HwpError::InvalidArgument`](hwp_core::HwpError::InvalidArgument) if
/// `highwatermark` is `Some(0)` or no runtime is available.
pub fn map_iterator<S, F, Fut, U, E>(
    source: S,
    transform: F,
    highwatermark: Option<usize>,
) -> Result<OrderedOutput<U>>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
    F: Fn(S::Item) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
    U: Send + 'static,
{
    let highwatermark = Highwatermark::resolve(highwatermark)?;
    scheduler::start(Source::from_values(source), transform, highwatermark)
}

/// Like [`map_iterator`] over a source that can fail.
///
/// A source error is yielded as
/// [`HwpError::SourceFailure`](hwp_core::HwpError::SourceFailure) at the position
/// the failed pull would have occupied; the source is not pulled again.
///
/// # Errors
///
/// Same as [`map_iterator`].
pub fn try_map_iterator<S, I, SE, F, Fut, U, E>(
    source: S,
    transform: F,
    highwatermark: Option<usize>,
) -> Result<OrderedOutput<U>>
where
    S: Stream<Item = core::result::Result<I, SE>> + Send + 'static,
    SE: Into<BoxError> + Send + 'static,
    I: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
    U: Send + 'static,
{
    let highwatermark = Highwatermark::resolve(highwatermark)?;
    scheduler::start(Source::new(source), transform, highwatermark)
}

/// Apply `transform` to every item of `source` and collect the results in order.
///
/// # Errors
///
/// Fails with the first error in source order; no partial results are returned.
/// Invalid arguments fail before the source is touched, but are only reported
/// once the future is awaited; use [`map_iterator`] to get them at call time.
pub fn map<S, F, Fut, U, E>(
    source: S,
    transform: F,
    highwatermark: Option<usize>,
) -> impl Future<Output = Result<Vec<U>>> + Send
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
    F: Fn(S::Item) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
    U: Send + 'static,
{
    let output = map_iterator(source, transform, highwatermark);
    async move { accumulate::collect(output?).await }
}

/// [`map`] over a source that can fail.
///
/// # Errors
///
/// Same as [`map`], plus source failures.
pub fn try_map<S, I, SE, F, Fut, U, E>(
    source: S,
    transform: F,
    highwatermark: Option<usize>,
) -> impl Future<Output = Result<Vec<U>>> + Send
where
    S: Stream<Item = core::result::Result<I, SE>> + Send + 'static,
    SE: Into<BoxError> + Send + 'static,
    I: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
    U: Send + 'static,
{
    let output = try_map_iterator(source, transform, highwatermark);
    async move { accumulate::collect(output?).await }
}

/// Run an effectful `action` over every item of `source` with bounded concurrency.
///
/// Resolves with the number of processed items once every action has been
/// delivered in order.
///
/// # Errors
///
/// Fails with the first error in source order.
pub fn for_each<S, F, Fut, E>(
    source: S,
    action: F,
    highwatermark: Option<usize>,
) -> impl Future<Output = Result<u64>> + Send
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
    F: Fn(S::Item) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
{
    let output = map_iterator(source, action, highwatermark);
    async move { accumulate::drain(output?).await }
}
