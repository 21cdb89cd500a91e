// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::join_all;
use hwp_test_utils::ConcurrencyProbe;

#[test]
fn test_start_and_finish_counts() {
    let probe = ConcurrencyProbe::new();

    assert_eq!(probe.start(), 1);
    assert_eq!(probe.start(), 2);
    probe.finish();

    assert_eq!(probe.started(), 2);
    assert_eq!(probe.finished(), 1);
    assert_eq!(probe.in_flight(), 1);
    assert_eq!(probe.max_in_flight(), 2);
}

#[tokio::test]
async fn test_track_records_overlap_of_concurrent_futures() {
    // Arrange
    let probe = ConcurrencyProbe::new();

    // Act
    let results = join_all((0..4).map(|n| probe.track(async move { n * 10 }))).await;

    // Assert
    assert_eq!(results, vec![0, 10, 20, 30]);
    assert_eq!(probe.finished(), 4);
    assert_eq!(probe.max_in_flight(), 4);
}

#[test]
fn test_clones_share_counters() {
    let probe = ConcurrencyProbe::new();
    let clone = probe.clone();

    clone.start();

    assert_eq!(probe.started(), 1);
}
