// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

const DEFAULT_CONFIG_FILE_NAME: &str = "default.toml";

#[derive(Debug, Deserialize)]
/// Settings for metricstore.
pub struct MetricStoreSettings {
  default_store_name: String,
  initial_map_capacity: usize,
}

impl MetricStoreSettings {
  /// Get the settings for the default store name.
  pub fn get_default_store_name(&self) -> &str {
    self.default_store_name.as_str()
  }

  /// Get the initial capacity hint for the name->set map of a store.
  pub fn get_initial_map_capacity(&self) -> usize {
    self.initial_map_capacity
  }

  pub fn get_default_config_file_name() -> &'static str {
    DEFAULT_CONFIG_FILE_NAME
  }
}

#[derive(Debug, Deserialize)]
/// Settings for metricstore, read from config file.
pub struct Settings {
  metricstore: MetricStoreSettings,
}

impl Settings {
  /// Create Settings from given configuration directory path.
  pub fn new(config_dir_path: &str) -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config_default_file_name = format!("{}/{}", config_dir_path, DEFAULT_CONFIG_FILE_NAME);
    let config_environment_file_name = format!("{}/{}.toml", config_dir_path, run_mode);

    let config = Config::builder()
      // Start off by merging in the "default" configuration file
      .add_source(File::with_name(&config_default_file_name))
      // Add in the current environment file
      // Default to 'development' env
      // Note that this file is _optional_
      .add_source(File::with_name(&config_environment_file_name).required(false))
      // Add in settings from the environment (with a prefix of METRICSTORE)
      // Eg.. `METRICSTORE_DEBUG=1` would set the `debug` key
      .add_source(Environment::with_prefix("metricstore"))
      .build()?;

    // You can deserialize (and thus freeze) the entire configuration as
    config.try_deserialize()
  }

  /// Get metricstore settings.
  pub fn get_metricstore_settings(&self) -> &MetricStoreSettings {
    &self.metricstore
  }
}
