// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Windowed scheduler: keeps up to `highwatermark` operations in flight.
//!
//! A single pump task owns the source. Whenever the window has a free slot it
//! pulls the next item, reserves the slot for that item's position and spawns
//! the transform immediately, without waiting on earlier operations. Each
//! operation writes its outcome into its own slot; the [`OrderedOutput`] hands
//! slots to the consumer strictly by position.
//!
//! Once the consumer has received an error, or dropped the output, the window
//! closes: the pump stops pulling and outcomes of operations still running are
//! discarded when they arrive.

use crate::output::OrderedOutput;
use crate::source::{Pull, Source};
use crate::window::Window;
use core::any::Any;
use core::future::Future;
use core::panic::AssertUnwindSafe;
use core::pin::pin;
use futures::future::{select, Either};
use futures::stream::Stream;
use futures::FutureExt;
use hwp_core::hwp_task::spawn_detached;
use hwp_core::{BoxError, CancellationToken, Highwatermark, HwpError, HwpTask, Result};
use std::sync::Arc;

/// Start a pipeline over `source`, returning its ordered output.
///
/// Must be called from within a runtime; the pump and the operations are spawned
/// on it.
///
/// # Errors
///
/// Returns [`HwpError::InvalidArgument`] if no runtime is available.
pub fn start<S, I, SE, F, Fut, U, E>(
    source: Source<S>,
    transform: F,
    highwatermark: Highwatermark,
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
    let window = Arc::new(Window::new(highwatermark));
    let transform = Arc::new(transform);

    let pump = HwpTask::spawn({
        let window = window.clone();
        move |cancel| run_pump(source, transform, window, cancel)
    })?;

    debug!("hwp: pipeline started with highwatermark {highwatermark}");
    Ok(OrderedOutput::new(window, pump))
}

async fn run_pump<S, I, SE, F, Fut, U, E>(
    mut source: Source<S>,
    transform: Arc<F>,
    window: Arc<Window<U>>,
    cancel: CancellationToken,
) where
    S: Stream<Item = core::result::Result<I, SE>> + Send + 'static,
    SE: Into<BoxError> + Send + 'static,
    I: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
    U: Send + 'static,
{
    loop {
        if !window.wait_for_capacity().await {
            debug!("hwp: window closed after {} pull(s), pump stopping", source.pulled());
            return;
        }

        let pulled = {
            let pull = pin!(source.pull());
            let stop = pin!(cancel.cancelled());
            match select(pull, stop).await {
                Either::Left((pulled, _)) => pulled,
                Either::Right(_) => return,
            }
        };

        match pulled {
            Pull::Item(item) => {
                // The window may have closed while the pull was suspended.
                let Some(position) = window.reserve() else {
                    return;
                };
                dispatch(&window, &transform, position, item);
            }
            Pull::Failed(error) => {
                window.fail_source(error);
                return;
            }
            Pull::End => {
                debug!("hwp: source exhausted after {} item(s)", source.pulled());
                window.finish_source();
                return;
            }
        }
    }
}

/// Spawn the transform for `item`; its outcome is always written to, or discarded by, the window.
fn dispatch<I, F, Fut, U, E>(window: &Arc<Window<U>>, transform: &Arc<F>, position: u64, item: I)
where
    I: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = core::result::Result<U, E>> + Send + 'static,
    E: Into<BoxError> + Send + 'static,
    U: Send + 'static,
{
    let window = window.clone();
    let transform = transform.clone();

    spawn_detached(async move {
        let outcome = AssertUnwindSafe(async move { (*transform)(item).await })
            .catch_unwind()
            .await;

        let result = match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => Err(HwpError::transform_failure(position, error)),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!("hwp: transform panicked at position {position}: {message}");
                Err(HwpError::TransformPanic { position, message })
            }
        };

        if !window.resolve(position, result) {
            debug!("hwp: discarding outcome of position {position}, output already terminated");
        }
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
