// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded, position-indexed window of in-flight operations.
//!
//! The window is the only state shared between the pump (which pulls from the
//! source and dispatches operations), the operation tasks (which resolve their
//! slot) and the consumer (which delivers the slot at the cursor). Every
//! mutation goes through one mutex.
//!
//! Slot `i` of the queue holds the operation at position `delivered + i`, so the
//! front of the queue is always the cursor. A slot is occupied from dispatch until
//! delivery; the queue length is the number of dispatched-but-undelivered
//! operations and never exceeds the highwatermark.

use event_listener::{Event, EventListener};
use hwp_core::{BoxError, Highwatermark, HwpError, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;

#[derive(Debug)]
enum Slot<U> {
    Pending,
    Resolved(Result<U>),
}

#[derive(Debug)]
struct State<U> {
    slots: VecDeque<Slot<U>>,
    dispatched: u64,
    delivered: u64,
    source_done: bool,
    closed: bool,
}

/// Outcome of trying to deliver the operation at the cursor.
#[derive(Debug)]
pub(crate) enum Delivery<U> {
    /// The cursor's operation was resolved and has been removed from the window.
    Ready(Result<U>),
    /// The cursor's operation has not resolved yet, or the source may still produce items.
    Pending,
    /// The source ended and every operation was delivered.
    Exhausted,
}

/// Point-in-time view of a pipeline's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Configured concurrency ceiling
    pub highwatermark: usize,
    /// Operations dispatched so far
    pub dispatched: u64,
    /// Results (or the terminating error) handed to the consumer so far
    pub delivered: u64,
    /// Operations holding a slot: dispatched and not yet delivered
    pub in_flight: usize,
}

#[derive(Debug)]
pub(crate) struct Window<U> {
    highwatermark: Highwatermark,
    state: Mutex<State<U>>,
    /// Notified when the cursor's slot resolves, the source ends, or the window closes.
    slot_ready: Event,
    /// Notified when a delivery frees a slot or the window closes.
    slot_freed: Event,
}

impl<U> Window<U> {
    pub(crate) fn new(highwatermark: Highwatermark) -> Self {
        Self {
            highwatermark,
            state: Mutex::new(State {
                slots: VecDeque::with_capacity(highwatermark.get()),
                dispatched: 0,
                delivered: 0,
                source_done: false,
                closed: false,
            }),
            slot_ready: Event::new(),
            slot_freed: Event::new(),
        }
    }

    /// Waits until a slot is free. Returns `false` once the window is closed.
    pub(crate) async fn wait_for_capacity(&self) -> bool {
        loop {
            let listener = self.slot_freed.listen();
            {
                let state = self.state.lock();
                if state.closed {
                    return false;
                }
                if state.slots.len() < self.highwatermark.get() {
                    return true;
                }
            }
            listener.await;
        }
    }

    /// Claims the next slot and returns its position, or `None` if the window is closed.
    ///
    /// Callers must have observed free capacity first; only the pump reserves.
    pub(crate) fn reserve(&self) -> Option<u64> {
        let mut state = self.state.lock();
        if state.closed || state.slots.len() >= self.highwatermark.get() {
            return None;
        }
        let position = state.dispatched;
        state.dispatched += 1;
        state.slots.push_back(Slot::Pending);
        Some(position)
    }

    /// Stores the outcome of the operation at `position`.
    ///
    /// Returns `false` when the outcome was discarded because the window closed.
    pub(crate) fn resolve(&self, position: u64, result: Result<U>) -> bool {
        let at_cursor = {
            let mut state = self.state.lock();
            if state.closed {
                return false;
            }
            let Some(index) = position
                .checked_sub(state.delivered)
                .and_then(|offset| usize::try_from(offset).ok())
            else {
                return false;
            };
            match state.slots.get_mut(index) {
                Some(slot) if matches!(slot, Slot::Pending) => *slot = Slot::Resolved(result),
                _ => return false,
            }
            index == 0
        };

        // Later positions cannot be delivered yet; the cursor's resolution wakes the consumer.
        if at_cursor {
            self.slot_ready.notify(usize::MAX);
        }
        true
    }

    /// Records that the source failed on the pull for the next position.
    pub(crate) fn fail_source(&self, error: BoxError) {
        if let Some(position) = self.reserve() {
            debug!("hwp: source failed at position {position}");
            self.resolve(position, Err(HwpError::source_failure(position, error)));
        }
        self.finish_source();
    }

    /// Records that the source has no more items.
    pub(crate) fn finish_source(&self) {
        self.state.lock().source_done = true;
        self.slot_ready.notify(usize::MAX);
    }

    /// Delivers the operation at the cursor if it has resolved.
    ///
    /// Delivering an error closes the window.
    pub(crate) fn take_next(&self) -> Delivery<U> {
        let delivery = {
            let mut state = self.state.lock();
            match state.slots.front() {
                Some(Slot::Resolved(_)) => match state.slots.pop_front() {
                    Some(Slot::Resolved(result)) => {
                        state.delivered += 1;
                        if result.is_err() {
                            close_locked(&mut state);
                        }
                        Delivery::Ready(result)
                    }
                    _ => Delivery::Pending,
                },
                Some(Slot::Pending) => Delivery::Pending,
                None if state.source_done || state.closed => Delivery::Exhausted,
                None => Delivery::Pending,
            }
        };

        if matches!(delivery, Delivery::Ready(_)) {
            self.slot_freed.notify(usize::MAX);
        }
        delivery
    }

    /// Registers interest in the cursor's slot resolving.
    ///
    /// Register before calling [`take_next`](Self::take_next) so no notification is lost.
    pub(crate) fn listen_ready(&self) -> EventListener {
        self.slot_ready.listen()
    }

    /// Stops the window: no new dispatches, later outcomes are discarded.
    pub(crate) fn close(&self) {
        close_locked(&mut self.state.lock());
        self.slot_freed.notify(usize::MAX);
        self.slot_ready.notify(usize::MAX);
    }

    pub(crate) fn snapshot(&self) -> WindowSnapshot {
        let state = self.state.lock();
        WindowSnapshot {
            highwatermark: self.highwatermark.get(),
            dispatched: state.dispatched,
            delivered: state.delivered,
            in_flight: state.slots.len(),
        }
    }
}

fn close_locked<U>(state: &mut State<U>) {
    if !state.closed {
        state.closed = true;
        let orphaned = state.slots.len();
        state.slots.clear();
        if orphaned > 0 {
            debug!("hwp: window closed with {orphaned} undelivered operation(s)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(highwatermark: usize) -> Window<u32> {
        Window::new(Highwatermark::new(highwatermark).unwrap())
    }

    fn value(delivery: Delivery<u32>) -> Option<u32> {
        match delivery {
            Delivery::Ready(Ok(value)) => Some(value),
            _ => None,
        }
    }

    #[test]
    fn reserve_stops_at_highwatermark() {
        let window = window(2);

        assert_eq!(window.reserve(), Some(0));
        assert_eq!(window.reserve(), Some(1));
        assert_eq!(window.reserve(), None);
        assert_eq!(window.snapshot().in_flight, 2);
    }

    #[test]
    fn out_of_order_resolution_is_delivered_in_order() {
        let window = window(3);
        for _ in 0..3 {
            window.reserve();
        }

        assert!(window.resolve(2, Ok(20)));
        assert!(window.resolve(1, Ok(10)));
        assert!(matches!(window.take_next(), Delivery::Pending));

        assert!(window.resolve(0, Ok(0)));
        assert_eq!(value(window.take_next()), Some(0));
        assert_eq!(value(window.take_next()), Some(10));
        assert_eq!(value(window.take_next()), Some(20));
        assert!(matches!(window.take_next(), Delivery::Pending));
    }

    #[test]
    fn delivery_frees_a_slot() {
        let window = window(1);
        assert_eq!(window.reserve(), Some(0));
        assert_eq!(window.reserve(), None);

        window.resolve(0, Ok(1));
        assert_eq!(value(window.take_next()), Some(1));

        assert_eq!(window.reserve(), Some(1));
        let snapshot = window.snapshot();
        assert_eq!(snapshot.dispatched, 2);
        assert_eq!(snapshot.delivered, 1);
        assert_eq!(snapshot.in_flight, 1);
    }

    #[test]
    fn exhausted_only_after_source_done_and_window_drained() {
        let window = window(4);
        window.reserve();
        window.finish_source();
        assert!(matches!(window.take_next(), Delivery::Pending));

        window.resolve(0, Ok(7));
        assert_eq!(value(window.take_next()), Some(7));
        assert!(matches!(window.take_next(), Delivery::Exhausted));
    }

    #[test]
    fn delivered_error_closes_window_and_discards_later_outcomes() {
        let window = window(4);
        for _ in 0..3 {
            window.reserve();
        }
        window.resolve(0, Err(HwpError::transform_failure(0, "kaboom")));

        assert!(matches!(window.take_next(), Delivery::Ready(Err(_))));
        assert!(!window.resolve(1, Ok(1)));
        assert_eq!(window.reserve(), None);
        assert!(matches!(window.take_next(), Delivery::Exhausted));
    }

    #[test]
    fn source_failure_takes_the_next_position() {
        let window = window(4);
        window.reserve();
        window.fail_source("broken pipe".into());

        window.resolve(0, Ok(1));
        assert_eq!(value(window.take_next()), Some(1));
        match window.take_next() {
            Delivery::Ready(Err(error)) => {
                assert!(error.is_source_failure());
                assert_eq!(error.position(), Some(1));
            }
            other => panic!("expected source failure, got {other:?}"),
        }
    }
}
