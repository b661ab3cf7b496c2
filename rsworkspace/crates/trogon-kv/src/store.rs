//! The [`KvStore`] capability every secrets backend offers.

use serde_json::{Map, Value};

/// One secret's payload: a JSON object with arbitrary values.
pub type Record = Map<String, Value>;

/// Read, write, delete and health-check access to a KV secrets store.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks (e.g. wrapped in `Arc<impl KvStore>`).
///
/// No method retries or applies its own timeout. Dropping the returned future
/// cancels the call; wrap it in `tokio::time::timeout` to impose a deadline.
pub trait KvStore: Send + Sync {
    /// The error type returned by all store operations.
    type Error: std::error::Error + Send + Sync;

    /// Fetch the record stored under `key`.
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Record, Self::Error>> + Send;

    /// Write `record` under `key`, replacing whatever was there.
    fn set(
        &self,
        key: &str,
        record: &Record,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;

    /// Remove the record stored under `key`.
    fn delete(&self, key: &str) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;

    /// Check that the store is reachable and healthy.
    fn ping(&self) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Every backend must hand back exactly what it was given.
    pub(crate) async fn assert_round_trip<S: KvStore>(store: &S, key: &str, record: &Record) {
        store.set(key, record).await.unwrap();
        assert_eq!(&store.get(key).await.unwrap(), record);
    }
}
