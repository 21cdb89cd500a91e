// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use hwp_exec::source::{Pull, Source};
use hwp_test_utils::{ErrorInjectingStream, TestError};

#[tokio::test]
async fn test_source_pulls_items_then_end() {
    let mut source = Source::from_values(stream::iter(vec![1, 2]));

    assert!(matches!(source.pull().await, Pull::Item(1)));
    assert!(matches!(source.pull().await, Pull::Item(2)));
    assert!(matches!(source.pull().await, Pull::End));
    assert_eq!(source.pulled(), 2);
    assert!(source.is_finished());
}

#[tokio::test]
async fn test_source_is_not_pulled_after_failure() {
    // Arrange
    let mut source = Source::new(ErrorInjectingStream::new(stream::iter(vec![1, 2, 3]), 1));

    // Act & Assert
    assert!(matches!(source.pull().await, Pull::Item(1)));
    match source.pull().await {
        Pull::Failed(error) => {
            assert_eq!(
                error.downcast_ref::<TestError>(),
                Some(&TestError::SourceBroken(1))
            );
        }
        other => panic!("expected failure, got {other:?}"),
    }
    // The inner stream still has items, but the source is finished.
    assert!(matches!(source.pull().await, Pull::End));
    assert_eq!(source.pulled(), 1);
}
