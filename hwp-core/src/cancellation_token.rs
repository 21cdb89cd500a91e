// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic stop signal shared between a pipeline and its pump.

use core::sync::atomic::{AtomicBool, Ordering};
use event_listener::Event;
use std::sync::Arc;

/// Clonable one-shot stop signal.
///
/// All clones share the same flag: once any clone calls [`cancel`](Self::cancel),
/// every clone reports [`is_cancelled`](Self::is_cancelled) and every pending
/// [`cancelled`](Self::cancelled) call returns.
///
/// ```
/// use hwp_core::CancellationToken;
///
/// let token = CancellationToken::new();
/// let observer = token.clone();
/// assert!(!observer.is_cancelled());
///
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    signal: Arc<Signal>,
}

#[derive(Debug, Default)]
struct Signal {
    raised: AtomicBool,
    waiters: Event,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Calling it again has no further effect.
    pub fn cancel(&self) {
        if !self.signal.raised.swap(true, Ordering::AcqRel) {
            self.signal.waiters.notify(usize::MAX);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.raised.load(Ordering::Acquire)
    }

    /// Wait until the signal is raised.
    pub async fn cancelled(&self) {
        while !self.is_cancelled() {
            let listener = self.signal.waiters.listen();
            // A cancel between the check and `listen` would otherwise be missed.
            if self.is_cancelled() {
                return;
            }
            listener.await;
        }
    }
}
