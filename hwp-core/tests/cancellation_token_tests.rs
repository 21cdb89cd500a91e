// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use hwp_core::CancellationToken;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_cancel_is_idempotent_and_shared() {
    let token = CancellationToken::new();
    let other = token.clone();

    other.cancel();
    other.cancel();

    assert!(token.is_cancelled());
    assert!(other.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_resolves_immediately_if_already_cancelled() {
    let token = CancellationToken::new();
    token.cancel();

    tokio::time::timeout(Duration::from_millis(100), token.cancelled())
        .await
        .expect("cancelled() should resolve immediately");
}

#[tokio::test]
async fn test_cancelled_wakes_waiter_from_other_task() -> anyhow::Result<()> {
    // Arrange
    let token = CancellationToken::new();
    let waiter = token.clone();
    let handle = tokio::spawn(async move {
        waiter.cancelled().await;
    });

    // Act
    tokio::task::yield_now().await;
    token.cancel();

    // Assert
    tokio::time::timeout(Duration::from_secs(1), handle).await??;
    Ok(())
}
