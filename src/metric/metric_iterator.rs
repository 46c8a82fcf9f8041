// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::collections::BinaryHeap;

use dashmap::DashSet;

use crate::metric::metric::Metric;
use crate::utils::error::MetricStoreError;
use crate::utils::sync::Arc;

/// One-shot forward cursor over the metrics matching a time range.
///
/// The iterator traverses an owned snapshot taken once at construction, so it
/// never observes inserts or removals that happen to the store afterwards.
/// `remove` on the other hand reaches the live backing set, not the snapshot.
pub struct MetricIterator {
  /// The live set inside the store that `remove` mutates.
  backing: Arc<DashSet<Metric>>,

  /// Metrics within the queried range, sorted ascending by timestamp.
  snapshot: Vec<Metric>,

  /// Index into the snapshot. Starts at -1, i.e. before the first element.
  cursor: isize,
}

impl MetricIterator {
  /// Create a new iterator over the metrics in the backing set with
  /// range_start_time <= timestamp <= range_end_time.
  pub(crate) fn new(
    backing: Arc<DashSet<Metric>>,
    range_start_time: u64,
    range_end_time: u64,
  ) -> Self {
    // The backing set has no defined iteration order, so the matching metrics
    // are collected into a heap and drained into a sorted vector.
    let mut matching: BinaryHeap<Metric> = BinaryHeap::new();
    for metric in backing.iter() {
      let timestamp = metric.get_timestamp();
      if timestamp >= range_start_time && timestamp <= range_end_time {
        matching.push(metric.key().clone());
      }
    }

    MetricIterator {
      backing,
      snapshot: matching.into_sorted_vec(),
      cursor: -1,
    }
  }

  /// Advance the cursor. Returns true if the cursor is now positioned on a
  /// snapshot element, and false once the snapshot is exhausted. Keeps
  /// returning false on subsequent calls after exhaustion.
  pub fn move_next(&mut self) -> bool {
    if self.cursor >= self.snapshot.len() as isize - 1 {
      self.cursor += 1;
      return false;
    }
    self.cursor += 1;
    true
  }

  /// Get the metric the cursor is positioned on.
  pub fn current(&self) -> Result<&Metric, MetricStoreError> {
    if self.cursor < 0 || self.cursor >= self.snapshot.len() as isize {
      return Err(MetricStoreError::InvalidCursorState(self.cursor));
    }
    Ok(&self.snapshot[self.cursor as usize])
  }

  /// Remove the metric the cursor is positioned on from the backing store.
  /// The snapshot is left untouched, so the traversal continues in the
  /// original order and length. Removing a metric that is no longer in the
  /// backing set is a no-op.
  pub fn remove(&self) -> Result<(), MetricStoreError> {
    let current = self.current()?;
    self.backing.remove(current);
    Ok(())
  }

  /// Release the iterator. There is nothing to release beyond scope exit,
  /// so this always succeeds and may be called any number of times.
  pub fn close(&self) {}
}
