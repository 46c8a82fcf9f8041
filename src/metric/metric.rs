// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Represents a single named metric observation.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Metric {
  /// Name of the metric.
  name: String,

  /// Timestamp in milliseconds since epoch.
  timestamp: u64,
}

impl Metric {
  /// Create a new Metric from given name and timestamp.
  pub fn new(name: &str, timestamp: u64) -> Self {
    Metric {
      name: name.to_owned(),
      timestamp,
    }
  }

  /// Get the metric name.
  pub fn get_name(&self) -> &str {
    &self.name
  }

  /// Get the timestamp.
  pub fn get_timestamp(&self) -> u64 {
    self.timestamp
  }
}

impl Ord for Metric {
  fn cmp(&self, other: &Self) -> Ordering {
    // Order primarily by timestamp. Name is compared only to keep the order
    // total for metrics sharing a timestamp.
    self
      .timestamp
      .cmp(&other.timestamp)
      .then_with(|| self.name.cmp(&other.name))
  }
}

impl PartialOrd for Metric {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn test_metric() {
    let metric = Metric::new("request_count", 1700000000000);
    assert_eq!(metric.get_name(), "request_count");
    assert_eq!(metric.get_timestamp(), 1700000000000);

    let serialized = serde_json::to_string(&metric).unwrap();
    let deserialized: Metric = serde_json::from_str(&serialized).unwrap();
    assert_eq!(metric, deserialized);
  }

  #[test]
  fn test_value_equality() {
    let first = Metric::new("cpu", 100);
    let second = Metric::new("cpu", 100);
    assert_eq!(first, second);

    // Same name with a different timestamp is a different metric.
    assert_ne!(first, Metric::new("cpu", 101));
    assert_ne!(first, Metric::new("memory", 100));

    // Duplicates collapse in a set.
    let mut set = HashSet::new();
    set.insert(first);
    set.insert(second);
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_ordering() {
    let mut metrics = vec![
      Metric::new("cpu", 300),
      Metric::new("cpu", 100),
      Metric::new("cpu", 200),
    ];
    metrics.sort();

    let timestamps: Vec<u64> = metrics.iter().map(|m| m.get_timestamp()).collect();
    assert_eq!(timestamps, vec![100, 200, 300]);
  }
}
