// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::test_error::TestError;
use futures::future::{self, Ready};

/// Identity transform over positions that fails with [`TestError::Kaboom`] at `position`.
///
/// ```rust
/// use hwp_test_utils::{transforms::fail_at, TestError};
///
/// # #[tokio::main]
/// # async fn main() {
/// let transform = fail_at(2);
/// assert_eq!(transform(1).await, Ok(1));
/// assert_eq!(transform(2).await, Err(TestError::Kaboom(2)));
/// # }
/// ```
pub fn fail_at(position: u64) -> impl Fn(u64) -> Ready<Result<u64, TestError>> + Clone + Send + Sync {
    move |n| {
        future::ready(if n == position {
            Err(TestError::Kaboom(n))
        } else {
            Ok(n)
        })
    }
}
