// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pull-based adapter over a caller supplied stream.

use core::convert::Infallible;
use core::pin::Pin;
use futures::stream::{Map, Stream, StreamExt};
use hwp_core::BoxError;

/// Result of one pull from a [`Source`].
#[derive(Debug)]
pub enum Pull<I> {
    Item(I),
    /// The source failed; it produces nothing afterwards.
    Failed(BoxError),
    End,
}

/// Stream of plain values lifted into a never-failing source.
pub type Values<S> =
    Map<S, fn(<S as Stream>::Item) -> Result<<S as Stream>::Item, Infallible>>;

/// Forward-only view of a stream of `Result<I, E>`, one item per [`pull`](Source::pull).
///
/// Once the source has reported its end or a failure, every later pull returns
/// [`Pull::End`] without touching the inner stream again.
///
/// ```
/// use futures::stream;
/// use hwp_exec::source::{Pull, Source};
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut source = Source::from_values(stream::iter(vec!['a']));
/// assert!(matches!(source.pull().await, Pull::Item('a')));
/// assert!(matches!(source.pull().await, Pull::End));
/// assert!(matches!(source.pull().await, Pull::End));
/// # }
/// ```
pub struct Source<S> {
    inner: Pin<Box<S>>,
    pulled: u64,
    finished: bool,
}

impl<S> Source<S> {
    /// Wrap a fallible stream.
    pub fn new(stream: S) -> Self {
        Self {
            inner: Box::pin(stream),
            pulled: 0,
            finished: false,
        }
    }

    /// Number of items pulled so far.
    pub const fn pulled(&self) -> u64 {
        self.pulled
    }

    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<S: Stream> Source<Values<S>> {
    /// Wrap a stream of plain values that cannot fail.
    pub fn from_values(stream: S) -> Self {
        let lift: fn(S::Item) -> Result<S::Item, Infallible> = Ok;
        Self::new(stream.map(lift))
    }
}

impl<S, I, E> Source<S>
where
    S: Stream<Item = Result<I, E>>,
    E: Into<BoxError>,
{
    pub async fn pull(&mut self) -> Pull<I> {
        if self.finished {
            return Pull::End;
        }

        match self.inner.next().await {
            Some(Ok(item)) => {
                self.pulled += 1;
                Pull::Item(item)
            }
            Some(Err(error)) => {
                self.finished = true;
                Pull::Failed(error.into())
            }
            None => {
                self.finished = true;
                Pull::End
            }
        }
    }
}

impl<S> core::fmt::Debug for Source<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Source")
            .field("pulled", &self.pulled)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
