// This code is licensed under Elastic License 2.0
// https://www.elastic.co/licensing/elastic-license

#[cfg(not(loom))]
pub(crate) use std::sync::Arc;
#[cfg(not(loom))]
#[allow(unused_imports)]
pub(crate) use std::thread;

#[cfg(loom)]
pub(crate) use loom::sync::Arc;
#[cfg(loom)]
pub(crate) use loom::thread;

// A call to this function will compile only if T is Send + Sync.
#[cfg(test)]
pub fn is_sync_send<T: Send + Sync>() {}

#[test]
fn test_is_sync_send() {
  is_sync_send::<u32>();
  is_sync_send::<Arc<u32>>();
}
