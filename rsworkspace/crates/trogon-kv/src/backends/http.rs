//! HashiCorp Vault (and OpenBao) KV v2 backend for [`KvStore`].
//!
//! Operation → request mapping:
//! ```text
//! new      GET     /v1/sys/mounts/{mount}   200
//! get      GET     /v1/{mount}/data/{key}   200 (404 → KeyNotFound)
//! set      POST    /v1/{mount}/data/{key}   200
//! delete   DELETE  /v1/{mount}/data/{key}   204
//! ping     GET     /v1/sys/health           200
//! ```
//!
//! Keys are interpolated into the path as-is. Callers must supply path-safe keys.

use reqwest::{Client, Method, StatusCode, header};
use serde::Serialize;
use serde_json::Value;

use crate::config::KvConfig;
use crate::engine::check_engine;
use crate::error::KvError;
use crate::store::{KvStore, Record};

/// Serialized as JSON `null`; every request carries a body, even GET and DELETE.
const NO_BODY: Option<&Value> = None;

#[derive(Serialize)]
struct WriteRequest<'a> {
    data: &'a Record,
}

// ── Client ────────────────────────────────────────────────────────────────────

/// [`KvStore`] backend talking to a KV v2 mount over HTTP.
///
/// Only obtainable through [`KvClient::new`] or [`KvClient::with_http_client`],
/// both of which verify the mount first. Cloning is cheap and clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct KvClient {
    client: Client,
    config: KvConfig,
}

impl KvClient {
    /// Build an HTTP client from `config` and verify the mount is KV v2.
    pub async fn new(config: KvConfig) -> Result<Self, KvError> {
        let client = if config.tls_skip_verify() {
            Client::builder().danger_accept_invalid_certs(true).build()?
        } else {
            Client::new()
        };

        Self::with_http_client(config, client).await
    }

    /// Like [`new`](Self::new), reusing a caller-built `reqwest::Client`.
    pub async fn with_http_client(config: KvConfig, client: Client) -> Result<Self, KvError> {
        let kv = Self { client, config };

        let path = format!("/sys/mounts/{}", kv.config.engine());
        let (status, body) = kv.request(Method::GET, &path, NO_BODY).await?;
        expect_status(status, StatusCode::OK)?;

        let descriptor = check_engine(&body)?;
        tracing::debug!(
            mount = %kv.config.engine(),
            engine_type = %descriptor.engine_type,
            version = %descriptor.version,
            "KV mount verified"
        );

        Ok(kv)
    }

    pub fn config(&self) -> &KvConfig {
        &self.config
    }

    fn data_path(&self, key: &str) -> String {
        format!("/{}/data/{}", self.config.engine(), key)
    }

    /// One request/response cycle.
    ///
    /// Returns the raw status and the body decoded as a JSON object; status
    /// policy is left to the caller. A `204` carries no body and a JSON `null`
    /// body decodes to nothing; both yield an empty object. Any other body
    /// that is not a JSON object is an error.
    async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Record), KvError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(&body).map_err(KvError::Encode)?;

        let resp = self
            .client
            .request(method.clone(), self.config.url(path))
            .bearer_auth(self.config.token())
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = resp.status();
        // Reading to the end hands the connection back before we return.
        let bytes = resp.bytes().await?;
        tracing::debug!(%method, path, status = status.as_u16(), "KV request completed");

        if status == StatusCode::NO_CONTENT {
            return Ok((status, Record::new()));
        }

        let decoded = serde_json::from_slice::<Option<Record>>(&bytes).map_err(KvError::Decode)?;
        Ok((status, decoded.unwrap_or_default()))
    }
}

fn expect_status(actual: StatusCode, expected: StatusCode) -> Result<(), KvError> {
    if actual == expected {
        Ok(())
    } else {
        Err(KvError::UnexpectedStatus(actual.as_u16()))
    }
}

/// Pull `data.data` out of a read response.
fn into_record(mut body: Record) -> Option<Record> {
    let Some(Value::Object(mut data)) = body.remove("data") else {
        return None;
    };
    match data.remove("data") {
        Some(Value::Object(record)) => Some(record),
        _ => None,
    }
}

// ── KvStore impl ──────────────────────────────────────────────────────────────

impl KvStore for KvClient {
    type Error = KvError;

    async fn get(&self, key: &str) -> Result<Record, Self::Error> {
        let (status, body) = self.request(Method::GET, &self.data_path(key), NO_BODY).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(KvError::KeyNotFound);
        }
        expect_status(status, StatusCode::OK)?;

        // A 200 without `data.data` is indistinguishable from a miss.
        into_record(body).ok_or(KvError::KeyNotFound)
    }

    async fn set(&self, key: &str, record: &Record) -> Result<(), Self::Error> {
        let body = WriteRequest { data: record };
        let (status, _) = self
            .request(Method::POST, &self.data_path(key), Some(&body))
            .await?;

        expect_status(status, StatusCode::OK)
    }

    async fn delete(&self, key: &str) -> Result<(), Self::Error> {
        let (status, _) = self
            .request(Method::DELETE, &self.data_path(key), NO_BODY)
            .await?;

        expect_status(status, StatusCode::NO_CONTENT)
    }

    async fn ping(&self) -> Result<(), Self::Error> {
        let (status, _) = self.request(Method::GET, "/sys/health", NO_BODY).await?;

        expect_status(status, StatusCode::OK)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
