// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded-concurrency, order-preserving execution of async transforms over streams.
//!
//! A pipeline pulls items from a source only as fast as its window has free
//! slots, runs the transform for each pulled item on its own task, and hands the
//! results back strictly in source order. At most `highwatermark` operations
//! (default 16) are dispatched but not yet delivered at any time.
//!
//! - [`map_iterator`] / [`try_map_iterator`]: lazy [`OrderedOutput`] stream of results
//! - [`map`] / [`try_map`]: every result collected into a `Vec`, or the first error
//! - [`for_each`]: run an effectful action over every item
//! - [`HighWaterExt`]: the same as stream methods

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;

pub mod accumulate;
pub mod high_water_ext;
pub mod output;
pub mod pipeline;
pub mod scheduler;
pub mod source;
mod window;

pub use high_water_ext::HighWaterExt;
pub use output::OrderedOutput;
pub use pipeline::{for_each, map, map_iterator, try_map, try_map_iterator};
pub use window::WindowSnapshot;
