// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::window::{Delivery, Window, WindowSnapshot};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use event_listener::EventListener;
use futures::stream::{FusedStream, Stream};
use hwp_core::{HwpTask, Result};
use std::sync::Arc;

/// Ordered results of a running pipeline.
///
/// Yields `Ok(value)` for each source item in source order, regardless of the
/// order in which transforms complete. The first failure reached in that order
/// is yielded once as `Err`, after which the stream ends. Once ended (by
/// exhaustion or failure) it keeps returning `None`.
///
/// The output is forward-only and cannot be restarted. Dropping it stops the
/// pipeline from pulling further items; operations already running finish in
/// the background and their outcomes are discarded.
///
/// ```
/// use futures::{future, stream, StreamExt};
/// use hwp_exec::map_iterator;
///
/// # #[tokio::main]
/// # async fn main() -> hwp_core::Result<()> {
/// let output = map_iterator(
///     stream::iter(vec!["a", "b", "c"]),
///     |item: &str| future::ready(Ok::<_, std::io::Error>(item.to_uppercase())),
///     None,
/// )?;
///
/// let items: Vec<String> = output.map(|item| item.unwrap()).collect().await;
/// assert_eq!(items, vec!["A", "B", "C"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OrderedOutput<U> {
    window: Arc<Window<U>>,
    listener: Option<EventListener>,
    terminated: bool,
    _pump: HwpTask,
}

impl<U> OrderedOutput<U> {
    pub(crate) fn new(window: Arc<Window<U>>, pump: HwpTask) -> Self {
        Self {
            window,
            listener: None,
            terminated: false,
            _pump: pump,
        }
    }

    /// Current dispatch and delivery counters of the pipeline's window.
    pub fn snapshot(&self) -> WindowSnapshot {
        self.window.snapshot()
    }

    pub fn highwatermark(&self) -> usize {
        self.window.snapshot().highwatermark
    }
}

impl<U> Stream for OrderedOutput<U> {
    type Item = Result<U>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.terminated {
            return Poll::Ready(None);
        }

        loop {
            match this.window.take_next() {
                Delivery::Ready(Ok(value)) => {
                    this.listener = None;
                    return Poll::Ready(Some(Ok(value)));
                }
                Delivery::Ready(Err(error)) => {
                    debug!("hwp: output terminated by {error}");
                    this.terminated = true;
                    this.listener = None;
                    return Poll::Ready(Some(Err(error)));
                }
                Delivery::Exhausted => {
                    this.terminated = true;
                    this.listener = None;
                    return Poll::Ready(None);
                }
                Delivery::Pending => match this.listener.as_mut() {
                    // Register, then look at the cursor once more before sleeping.
                    None => this.listener = Some(this.window.listen_ready()),
                    Some(listener) => match Pin::new(listener).poll(cx) {
                        Poll::Ready(()) => this.listener = None,
                        Poll::Pending => return Poll::Pending,
                    },
                },
            }
        }
    }
}

impl<U> FusedStream for OrderedOutput<U> {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<U> Drop for OrderedOutput<U> {
    fn drop(&mut self) {
        self.window.close();
    }
}
