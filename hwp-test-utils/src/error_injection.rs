// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source failure injection.

use crate::test_error::TestError;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;

/// A stream wrapper that fails at a given position.
///
/// Items before `fail_at` are passed through as `Ok`. At position `fail_at` the
/// wrapper yields `Err(TestError::SourceBroken(fail_at))` instead of pulling the
/// inner stream, and then keeps passing the remaining items through, so tests can
/// check that a pipeline does not pull past a failure.
///
/// ```rust
/// use futures::{stream, StreamExt};
/// use hwp_test_utils::{ErrorInjectingStream, TestError};
///
/// # #[tokio::main]
/// # async fn main() {
/// let items: Vec<_> = ErrorInjectingStream::new(stream::iter(vec![1, 2]), 1)
///     .collect()
///     .await;
///
/// assert_eq!(items, vec![Ok(1), Err(TestError::SourceBroken(1)), Ok(2)]);
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    fail_at: Option<u64>,
    position: u64,
}

impl<S> ErrorInjectingStream<S> {
    pub fn new(inner: S, fail_at: u64) -> Self {
        Self {
            inner,
            fail_at: Some(fail_at),
            position: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = Result<S::Item, TestError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.fail_at == Some(self.position) {
            self.fail_at = None;
            self.position += 1;
            return Poll::Ready(Some(Err(TestError::SourceBroken(self.position - 1))));
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.position += 1;
                Poll::Ready(Some(Ok(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
