// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the hwp pipeline.
//!
//! This crate is for development and testing only.
//!
//! # Key Types
//!
//! ## `ConcurrencyProbe`
//!
//! Counts how many transforms have started and finished, and records the highest
//! number running at once:
//!
//! ```rust
//! use hwp_test_utils::ConcurrencyProbe;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let probe = ConcurrencyProbe::new();
//! let doubled = probe.track(async { 21 * 2 }).await;
//!
//! assert_eq!(doubled, 42);
//! assert_eq!(probe.started(), 1);
//! assert_eq!(probe.finished(), 1);
//! # }
//! ```
//!
//! ## Sources
//!
//! - [`yielding_source`]: yields to the runtime before every item, like an async generator
//! - [`ErrorInjectingStream`]: turns one position of a stream into a source failure
//! - [`CountingStream`]: counts how many items were pulled
//!
//! ## Errors
//!
//! [`TestError`] is the error type returned by test transforms and sources;
//! [`fail_at`] is a ready-made transform failing at one position.

pub mod error_injection;
pub mod helpers;
pub mod probe;
pub mod sources;
pub mod test_error;
pub mod transforms;

pub use self::error_injection::ErrorInjectingStream;
pub use self::probe::ConcurrencyProbe;
pub use self::sources::{letters, numbers, yielding_source, CountingStream};
pub use self::test_error::TestError;
pub use self::transforms::fail_at;
