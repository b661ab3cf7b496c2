use std::fmt;

use thiserror::Error;
use trogon_std::env::ReadEnv;

const DEFAULT_VAULT_ADDR: &str = "http://127.0.0.1:8200";
const DEFAULT_MOUNT: &str = "secret";

/// Errors resolving a [`KvConfig`] from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("VAULT_TOKEN must be set to a non-empty value")]
    MissingToken,
}

/// Connection settings for [`KvClient`](crate::KvClient).
///
/// Resolved from environment variables by [`KvConfig::from_env`]:
/// - `VAULT_ADDR`: base address (default: `http://127.0.0.1:8200`)
/// - `VAULT_KV_MOUNT`: KV v2 mount name (default: `secret`)
/// - `VAULT_TOKEN`: bearer token (required)
/// - `VAULT_SKIP_VERIFY`: `true`/`1` accepts self-signed TLS certificates
#[derive(Clone)]
pub struct KvConfig {
    addr: String,
    engine: String,
    token: String,
    tls_skip_verify: bool,
}

impl KvConfig {
    pub fn new(addr: impl Into<String>, engine: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            engine: engine.into(),
            token: token.into(),
            tls_skip_verify: false,
        }
    }

    /// Accept self-signed TLS certificates. **Only for development.**
    pub fn with_tls_skip_verify(mut self) -> Self {
        self.tls_skip_verify = true;
        self
    }

    pub fn from_env<E: ReadEnv>(env: &E) -> Result<Self, ConfigError> {
        let token = env.non_empty("VAULT_TOKEN").ok_or(ConfigError::MissingToken)?;
        let config = Self::new(
            env.non_empty("VAULT_ADDR")
                .unwrap_or_else(|| DEFAULT_VAULT_ADDR.to_string()),
            env.non_empty("VAULT_KV_MOUNT")
                .unwrap_or_else(|| DEFAULT_MOUNT.to_string()),
            token,
        );

        let skip_verify = env
            .var("VAULT_SKIP_VERIFY")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        Ok(if skip_verify {
            config.with_tls_skip_verify()
        } else {
            config
        })
    }

    /// Base address, e.g. `https://vault.example.com:8200`.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Mount name of the KV engine.
    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn tls_skip_verify(&self) -> bool {
        self.tls_skip_verify
    }

    /// Full URL for an API path such as `/sys/health`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/v1{}", self.addr.trim_end_matches('/'), path)
    }
}

impl fmt::Debug for KvConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KvConfig")
            .field("addr", &self.addr)
            .field("engine", &self.engine)
            .field("token", &"<redacted>")
            .field("tls_skip_verify", &self.tls_skip_verify)
            .finish()
    }
}
