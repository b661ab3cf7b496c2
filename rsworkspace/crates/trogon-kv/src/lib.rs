//! Client for KV v2 secrets engines (HashiCorp Vault, OpenBao).
//!
//! A [`KvClient`] checks on construction that the configured mount is a KV
//! engine at version 2, then offers four operations through [`KvStore`]:
//! `get`, `set`, `delete` and `ping`. Each is exactly one HTTP round trip,
//! with no retries, caching or internal timeouts.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use trogon_kv::{KvClient, KvConfig, KvStore, Record};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), trogon_kv::KvError> {
//! let config = KvConfig::new("http://127.0.0.1:8200", "secret", "hvs.dev-token");
//! let kv = KvClient::new(config).await?;
//!
//! let mut record = Record::new();
//! record.insert("password".into(), json!("hunter2"));
//! kv.set("app/db", &record).await?;
//!
//! assert_eq!(kv.get("app/db").await?, record);
//! # Ok(())
//! # }
//! ```
//!
//! # Deadlines
//!
//! Drop the future to cancel, or bound it with `tokio::time::timeout`.

pub mod backends;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;

pub use backends::http::KvClient;
#[cfg(any(test, feature = "test-support"))]
pub use backends::memory::MemoryKv;
pub use config::{ConfigError, KvConfig};
pub use engine::{EngineDescriptor, SUPPORTED_ENGINE_VERSION, check_engine};
pub use error::KvError;
pub use store::{KvStore, Record};
