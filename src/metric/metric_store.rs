// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use std::fmt;

use dashmap::{DashMap, DashSet};
use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::metric::metric::Metric;
use crate::metric::metric_iterator::MetricIterator;
use crate::utils::sync::Arc;

#[derive(Debug)]
/// Represents a metric store - a map of metric name to the set of metrics
/// recorded under that name.
///
/// The outer map and the per-name sets are both concurrent, so insert,
/// remove_all and query never take a caller-visible lock. Contention is
/// limited to writers of the same metric name.
pub struct MetricStore {
  metric_map: DashMap<String, Arc<DashSet<Metric>>>,
}

impl MetricStore {
  /// Creates a new empty metric store.
  pub fn new() -> Self {
    MetricStore {
      metric_map: DashMap::new(),
    }
  }

  /// Creates a new empty metric store with the given capacity hint for the
  /// name->set map.
  pub fn with_capacity(capacity: usize) -> Self {
    MetricStore {
      metric_map: DashMap::with_capacity(capacity),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.metric_map.is_empty()
  }

  /// Insert a metric into the set keyed by its name, creating the set if
  /// this is the first metric under that name. Inserting the same
  /// (name, timestamp) pair again collapses to a single entry.
  pub fn insert(&self, metric: Metric) {
    debug!(
      "Inserting metric in store: name {}, timestamp {}",
      metric.get_name(),
      metric.get_timestamp()
    );

    // Access or insert the set for the given metric name, ensuring thread-safe
    // operation. The entry guard is dropped before touching the set itself, so
    // only writers of the same name contend on the inner set.
    let metric_set = self
      .metric_map
      .entry(metric.get_name().to_owned())
      .or_default()
      .value()
      .clone();

    metric_set.insert(metric);
  }

  /// Remove all metrics recorded under the given name. Detaches the whole
  /// entry from the map in one atomic step; an insert racing with this call
  /// lands either in the detached set or in a freshly created one.
  pub fn remove_all(&self, name: &str) {
    debug!("Removing all metrics in store with name {}", name);
    self.metric_map.remove(name);
  }

  /// Get an iterator over the metrics with the given name and
  /// range_start_time <= timestamp <= range_end_time (both inclusive). The
  /// iterator traverses a snapshot taken at this call; an unknown name or an
  /// inverted range yield an iterator that is exhausted immediately.
  pub fn query(&self, name: &str, range_start_time: u64, range_end_time: u64) -> MetricIterator {
    let backing = self
      .metric_map
      .get(name)
      .map(|entry| entry.value().clone())
      .unwrap_or_default();

    MetricIterator::new(backing, range_start_time, range_end_time)
  }

  #[cfg(test)]
  /// Get the underlying name->set map.
  pub fn get_metric_map(&self) -> &DashMap<String, Arc<DashSet<Metric>>> {
    &self.metric_map
  }

  #[cfg(test)]
  /// Get the live set for the given metric name.
  pub fn get_metrics(&self, name: &str) -> Option<Arc<DashSet<Metric>>> {
    self.metric_map.get(name).map(|entry| entry.value().clone())
  }
}

impl Default for MetricStore {
  fn default() -> Self {
    Self::new()
  }
}

/// Custom Serialize for MetricStore
impl Serialize for MetricStore {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let map = &self.metric_map;
    let mut map_ser = serializer.serialize_map(Some(map.len()))?;
    for entry in map.iter() {
      let key = entry.key();
      let value = entry.value().as_ref();
      map_ser.serialize_entry(&key, value)?;
    }
    map_ser.end()
  }
}

/// Custom Deserialize for MetricStore
impl<'de> Deserialize<'de> for MetricStore {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(MetricStoreVisitor)
  }
}

struct MetricStoreVisitor;

impl<'de> Visitor<'de> for MetricStoreVisitor {
  type Value = MetricStore;

  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a map of metric name to a set of metrics")
  }

  fn visit_map<M>(self, mut access: M) -> Result<MetricStore, M::Error>
  where
    M: MapAccess<'de>,
  {
    let dash_map = DashMap::new();

    while let Some((key, value)) = access.next_entry::<String, DashSet<Metric>>()? {
      dash_map.insert(key, Arc::new(value));
    }

    Ok(MetricStore {
      metric_map: dash_map,
    })
  }
}
