// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic task spawning.
//!
//! The pipeline spawns two kinds of work: one long-lived pump per pipeline,
//! owned through an [`HwpTask`] handle that cancels it on drop, and one detached
//! task per operation, which always runs to completion.
//!
//! Select the runtime with the `runtime-tokio` (default) or `runtime-smol` feature.

use crate::error::{HwpError, Result};
use crate::CancellationToken;
use core::future::Future;

/// Handle to a spawned background task with cooperative cancellation.
///
/// The spawned future receives a [`CancellationToken`] which is cancelled when
/// the handle is dropped or [`cancel`](Self::cancel) is called. The task is
/// expected to watch the token and return.
///
/// ```rust
/// use hwp_core::HwpTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = HwpTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// })
/// .unwrap();
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct HwpTask {
    cancel: CancellationToken,
}

impl HwpTask {
    /// Spawn a cancellable background task.
    ///
    /// # Errors
    ///
    /// Returns [`HwpError::InvalidArgument`] when called outside of a runtime.
    pub fn spawn<F, Fut>(f: F) -> Result<Self>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        ensure_runtime()?;
        let cancel = CancellationToken::new();
        spawn_detached(f(cancel.clone()));
        Ok(Self { cancel })
    }

    /// Signal the task to stop at its next cancellation check.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for HwpTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Check that a runtime is available to spawn on.
///
/// # Errors
///
/// Returns [`HwpError::InvalidArgument`] when no runtime is entered.
pub fn ensure_runtime() -> Result<()> {
    #[cfg(feature = "runtime-tokio")]
    {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(HwpError::invalid_argument(
                "no tokio runtime is available to run transforms on",
            ));
        }
        Ok(())
    }

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    {
        Ok(())
    }

    #[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
    {
        Err(HwpError::invalid_argument(
            "no runtime feature enabled: enable `runtime-tokio` or `runtime-smol`",
        ))
    }
}

/// Spawn a future that runs to completion on its own.
///
/// The caller is responsible for observing the future's outcome; nothing is
/// reported back through the runtime.
pub fn spawn_detached<Fut>(future: Fut)
where
    Fut: Future<Output = ()> + Send + 'static,
{
    #[cfg(feature = "runtime-tokio")]
    drop(tokio::spawn(future));

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    smol::spawn(future).detach();

    #[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
    drop(future);
}
