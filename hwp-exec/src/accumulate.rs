// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Eager consumers of an [`OrderedOutput`].

use crate::output::OrderedOutput;
use futures::stream::TryStreamExt;
use hwp_core::Result;

/// Collect every result of `output`, in order.
///
/// The first error fails the whole collection; the values gathered before it
/// are dropped and never returned.
///
/// # Errors
///
/// Returns the first error yielded by `output`, unmodified.
pub async fn collect<U>(output: OrderedOutput<U>) -> Result<Vec<U>> {
    let capacity = output.highwatermark();
    output
        .try_fold(Vec::with_capacity(capacity), |mut results, value| async move {
            results.push(value);
            Ok(results)
        })
        .await
        .inspect_err(|error| debug!("hwp: collect failed: {error}"))
}

/// Run `output` to completion, discarding the values.
///
/// # Errors
///
/// Returns the first error yielded by `output`, unmodified.
pub async fn drain<U>(output: OrderedOutput<U>) -> Result<u64> {
    output.try_fold(0u64, |count, _| async move { Ok(count + 1) }).await
}
