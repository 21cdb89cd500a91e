// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # hwp
//!
//! Apply an async transform to every item of a stream with at most
//! `highwatermark` operations in flight, and get the results back in source order.
//!
//! ## Overview
//!
//! - The source is pulled only as fast as free slots allow.
//! - Each pulled item's transform is spawned right away, without waiting for
//!   earlier items.
//! - Results are delivered strictly in source order; a result that finishes early
//!   keeps its slot until every earlier result was delivered.
//! - The first failure in source order ends the output. Later operations run to
//!   completion in the background and their outcomes are dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use futures::{future, stream, StreamExt};
//!
//! #[tokio::main]
//! async fn main() -> hwp::Result<()> {
//!     // Streaming: one result at a time, in order
//!     let mut output = hwp::map_iterator(
//!         stream::iter(vec!["a", "b", "c"]),
//!         |s: &str| future::ready(Ok::<_, std::io::Error>(s.to_uppercase())),
//!         None,
//!     )?;
//!     while let Some(item) = output.next().await {
//!         println!("{}", item?);
//!     }
//!
//!     // Eager: everything collected, or the first error
//!     let doubled = hwp::map(
//!         stream::iter(0..42u32),
//!         |n| async move { Ok::<_, std::io::Error>(n * 2) },
//!         Some(5),
//!     )
//!     .await?;
//!     assert_eq!(doubled.len(), 42);
//!     Ok(())
//! }
//! ```

pub use hwp_core::{
    BoxError, CancellationToken, Highwatermark, HwpError, Result, DEFAULT_HIGHWATERMARK,
};
pub use hwp_exec::{
    accumulate, for_each, map, map_iterator, try_map, try_map_iterator, HighWaterExt,
    OrderedOutput, WindowSnapshot,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use hwp_core::{Highwatermark, HwpError};
    pub use hwp_exec::{HighWaterExt, OrderedOutput};
}
