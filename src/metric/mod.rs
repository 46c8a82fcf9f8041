// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

//! Store and retrieve named metrics.
//!
//! Metrics are kept in memory, grouped by name in a concurrent set per name.
//! A range query takes a point-in-time snapshot of one name's set, sorted
//! ascending by timestamp, and hands it to a cursor-style iterator that can
//! delete elements from the live store while it traverses the snapshot.

pub mod metric;
pub mod metric_iterator;
pub mod metric_store;
