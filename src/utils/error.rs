// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
/// Enum for various errors in metricstore.
pub enum MetricStoreError {
  #[error("Invalid cursor state. Cursor {0} is not positioned on an element.")]
  InvalidCursorState(isize),

  #[error("Invalid configuration. {0}")]
  InvalidConfiguration(String),

  #[error("Cannot delete store. {0}")]
  CannotDeleteStore(String),

  #[error("Store not found. {0}")]
  StoreNotFound(String),
}
