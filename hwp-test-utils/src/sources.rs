// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{self, Stream};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Stream of `items` that yields to the runtime before producing each one.
pub fn yielding_source<T: Send + 'static>(items: Vec<T>) -> impl Stream<Item = T> + Send {
    stream::unfold(items.into_iter(), |mut items| async move {
        tokio::task::yield_now().await;
        items.next().map(|item| (item, items))
    })
}

/// `0..count` as a yielding source.
pub fn numbers(count: u64) -> impl Stream<Item = u64> + Send {
    yielding_source((0..count).collect())
}

/// The characters of `text` as a yielding source.
pub fn letters(text: &str) -> impl Stream<Item = String> + Send {
    yielding_source(text.chars().map(String::from).collect())
}

/// Stream wrapper counting the items pulled through it.
///
/// ```rust
/// use futures::{stream, StreamExt};
/// use hwp_test_utils::CountingStream;
///
/// # #[tokio::main]
/// # async fn main() {
/// let counting = CountingStream::new(stream::iter(1..=3));
/// let pulled = counting.counter();
///
/// let items: Vec<_> = counting.collect().await;
/// assert_eq!(items, vec![1, 2, 3]);
/// assert_eq!(pulled.get(), 3);
/// # }
/// ```
pub struct CountingStream<S> {
    inner: S,
    pulled: PullCounter,
}

/// Handle reading the count of a [`CountingStream`] after the stream was moved away.
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Arc<AtomicU64>);

impl PullCounter {
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S> CountingStream<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pulled: PullCounter::default(),
        }
    }

    pub fn counter(&self) -> PullCounter {
        self.pulled.clone()
    }
}

impl<S> Stream for CountingStream<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let polled = Pin::new(&mut self.inner).poll_next(cx);
        if let Poll::Ready(Some(_)) = &polled {
            self.pulled.0.fetch_add(1, Ordering::SeqCst);
        }
        polled
    }
}
