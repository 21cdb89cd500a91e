// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counters {
    started: usize,
    finished: usize,
    max_in_flight: usize,
}

/// Shared started/finished counters for transforms under test.
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct ConcurrencyProbe {
    counters: Arc<Mutex<Counters>>,
}

impl ConcurrencyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a start; returns the number of transforms now running.
    pub fn start(&self) -> usize {
        let mut counters = self.counters.lock();
        counters.started += 1;
        let in_flight = counters.started - counters.finished;
        counters.max_in_flight = counters.max_in_flight.max(in_flight);
        in_flight
    }

    /// Record a finish.
    pub fn finish(&self) {
        self.counters.lock().finished += 1;
    }

    /// Run `future` between a start and a finish, yielding to the runtime once first.
    ///
    /// The yield lets other dispatched transforms start, so concurrency actually
    /// builds up even on a current-thread runtime.
    pub async fn track<F: Future>(&self, future: F) -> F::Output {
        self.start();
        tokio::task::yield_now().await;
        let output = future.await;
        self.finish();
        output
    }

    pub fn started(&self) -> usize {
        self.counters.lock().started
    }

    pub fn finished(&self) -> usize {
        self.counters.lock().finished
    }

    pub fn in_flight(&self) -> usize {
        let counters = self.counters.lock();
        counters.started - counters.finished
    }

    /// Highest number of transforms running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.counters.lock().max_in_flight
    }
}
