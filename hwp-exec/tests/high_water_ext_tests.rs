// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{future, StreamExt};
use hwp_exec::HighWaterExt;
use hwp_test_utils::{letters, numbers, TestError};
use tokio_stream::wrappers::UnboundedReceiverStream;

#[tokio::test]
async fn test_map_highwater_streams_results() -> anyhow::Result<()> {
    let output = letters("hwp").map_highwater(Some(2), |s: String| async move {
        Ok::<_, TestError>(s.to_uppercase())
    })?;

    let results: Vec<String> = output.map(|item| item.unwrap()).collect().await;

    assert_eq!(results, vec!["H", "W", "P"]);
    Ok(())
}

#[tokio::test]
async fn test_collect_highwater_over_channel_source() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<u64>();
    for n in 0..10 {
        tx.send(n)?;
    }
    drop(tx);

    // Act
    let results = UnboundedReceiverStream::new(rx)
        .collect_highwater(None, |n| future::ready(Ok::<_, TestError>(n + 100)))
        .await?;

    // Assert
    assert_eq!(results, (100..110).collect::<Vec<_>>());
    Ok(())
}

#[tokio::test]
async fn test_for_each_highwater_counts_items() -> anyhow::Result<()> {
    let processed = numbers(7)
        .for_each_highwater(Some(1), |_| future::ready(Ok::<_, TestError>(())))
        .await?;

    assert_eq!(processed, 7);
    Ok(())
}
