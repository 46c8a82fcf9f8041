//! Utilities for managing metricstore.

pub mod config;
pub mod error;
pub mod io;
pub mod sync;
