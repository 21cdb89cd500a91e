// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use hwp_core::{HwpError, HwpTask};
use std::time::Duration;

#[tokio::test]
async fn test_drop_cancels_task() -> anyhow::Result<()> {
    // Arrange
    let (done_tx, done_rx) = tokio::sync::oneshot::channel();
    let task = HwpTask::spawn(|cancel| async move {
        cancel.cancelled().await;
        let _ = done_tx.send(());
    })?;

    // Act
    drop(task);

    // Assert
    tokio::time::timeout(Duration::from_secs(1), done_rx).await??;
    Ok(())
}

#[tokio::test]
async fn test_manual_cancel() -> anyhow::Result<()> {
    let task = HwpTask::spawn(|cancel| async move {
        cancel.cancelled().await;
    })?;

    assert!(!task.is_cancelled());
    task.cancel();
    assert!(task.is_cancelled());
    Ok(())
}

#[test]
fn test_spawn_outside_runtime_is_rejected() {
    let result = HwpTask::spawn(|_cancel| async {});

    assert!(matches!(result, Err(HwpError::InvalidArgument { .. })));
}
