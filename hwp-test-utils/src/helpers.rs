// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use futures::stream::{Stream, StreamExt};
use hwp_core::{HwpError, Result};

/// Expect the next result of an ordered output to be `Ok(expected)`.
pub async fn expect_next_value<S, T>(stream: &mut S, expected: T)
where
    S: Stream<Item = Result<T>> + Unpin,
    T: Debug + PartialEq,
{
    match stream.next().await {
        Some(Ok(value)) => assert_eq!(value, expected),
        Some(Err(error)) => panic!("expected {expected:?}, got error: {error}"),
        None => panic!("expected {expected:?}, stream ended"),
    }
}

/// Expect the next result of an ordered output to be an error, and return it.
pub async fn expect_next_error<S, T>(stream: &mut S) -> HwpError
where
    S: Stream<Item = Result<T>> + Unpin,
    T: Debug,
{
    match stream.next().await {
        Some(Err(error)) => error,
        Some(Ok(value)) => panic!("expected an error, got value {value:?}"),
        None => panic!("expected an error, stream ended"),
    }
}

/// Expect the stream to have ended.
pub async fn expect_end<S, T>(stream: &mut S)
where
    S: Stream<Item = Result<T>> + Unpin,
    T: Debug,
{
    if let Some(item) = stream.next().await {
        panic!("expected end of stream, got {item:?}");
    }
}
