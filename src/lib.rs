// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

pub mod metric;
pub mod utils;

use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use log::{debug, info};

use crate::metric::metric::Metric;
use crate::metric::metric_iterator::MetricIterator;
use crate::metric::metric_store::MetricStore;
use crate::utils::config::Settings;
use crate::utils::error::MetricStoreError;

/// Database for storing named metric stores.
///
/// A default store is always created from the settings; additional stores can
/// be created and deleted by name. The insert/remove_all/query operations
/// below address the default store.
pub struct MetricDB {
  store_map: DashMap<String, MetricStore>,
  settings: Settings,
}

impl MetricDB {
  /// Create a new MetricDB from the settings in the given config directory.
  /// The default store is always created with MetricDB.
  pub fn new(config_dir_path: &str) -> Result<Self, MetricStoreError> {
    let result = Settings::new(config_dir_path);

    match result {
      Ok(settings) => {
        let metricstore_settings = settings.get_metricstore_settings();
        let default_store_name = metricstore_settings.get_default_store_name();
        let initial_map_capacity = metricstore_settings.get_initial_map_capacity();

        info!(
          "Creating default metric store {} with initial map capacity {}",
          default_store_name, initial_map_capacity
        );
        let store_map = DashMap::new();
        store_map.insert(
          default_store_name.to_string(),
          MetricStore::with_capacity(initial_map_capacity),
        );

        let metricdb = MetricDB {
          store_map,
          settings,
        };

        Ok(metricdb)
      }
      Err(e) => {
        let error = MetricStoreError::InvalidConfiguration(e.to_string());
        Err(error)
      }
    }
  }

  /// Insert a metric into the default store.
  pub fn insert(&self, metric: Metric) {
    debug!(
      "Inserting metric in MetricDB: name {}, timestamp {}",
      metric.get_name(),
      metric.get_timestamp()
    );
    self
      .store_map
      .get(self.get_default_store_name())
      .unwrap()
      .value()
      .insert(metric);
  }

  /// Remove all metrics with the given name from the default store.
  pub fn remove_all(&self, name: &str) {
    debug!("Removing all metrics in MetricDB with name {}", name);
    self
      .store_map
      .get(self.get_default_store_name())
      .unwrap()
      .value()
      .remove_all(name);
  }

  /// Query the default store for metrics with the given name and range.
  pub fn query(&self, name: &str, range_start_time: u64, range_end_time: u64) -> MetricIterator {
    self
      .store_map
      .get(self.get_default_store_name())
      .unwrap()
      .value()
      .query(name, range_start_time, range_end_time)
  }

  /// Get the settings for this MetricDB.
  pub fn get_settings(&self) -> &Settings {
    &self.settings
  }

  /// Function to create new store with given name
  pub fn create_store(&self, store_name: &str) {
    let initial_map_capacity = self
      .settings
      .get_metricstore_settings()
      .get_initial_map_capacity();

    info!("Creating metric store {}", store_name);
    self.store_map.insert(
      store_name.to_string(),
      MetricStore::with_capacity(initial_map_capacity),
    );
  }

  /// Function to delete store with given name
  /// The default store cannot be deleted - insert/remove_all/query rely on it.
  pub fn delete_store(&self, store_name: &str) -> Result<(), MetricStoreError> {
    if store_name == self.get_default_store_name() {
      let error = MetricStoreError::CannotDeleteStore(store_name.to_string());
      return Err(error);
    }

    let store = self.store_map.remove(store_name);
    match store {
      Some(_) => Ok(()),
      None => {
        let error = MetricStoreError::StoreNotFound(store_name.to_string());
        Err(error)
      }
    }
  }

  /// Get the store with the given name.
  pub fn get_store(&self, store_name: &str) -> Option<Ref<'_, String, MetricStore>> {
    self.store_map.get(store_name)
  }

  pub fn get_default_store_name(&self) -> &str {
    self.settings.get_metricstore_settings().get_default_store_name()
  }
}
