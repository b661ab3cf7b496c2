//! Error taxonomy shared by every store operation.

use thiserror::Error;

/// Errors produced by [`KvClient`](crate::KvClient) and other [`KvStore`](crate::KvStore) backends.
#[derive(Debug, Error)]
pub enum KvError {
    /// The request could not be built or sent, or the connection failed mid-flight.
    #[error("failed to request: {0}")]
    Http(#[from] reqwest::Error),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body was not a JSON object.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The backend answered, but not with the one status this operation accepts.
    #[error("unexpected response status '{0}' received")]
    UnexpectedStatus(u16),

    /// `get` found nothing usable under the key.
    ///
    /// Raised both for a 404 and for a 200 whose body lacks `data.data`.
    #[error("key not found")]
    KeyNotFound,

    /// The mount is not a KV engine, or not the supported version.
    #[error("engine unsupported")]
    EngineUnsupported,
}

impl KvError {
    /// `true` for network, request-construction and body-decoding failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Encode(_) | Self::Decode(_))
    }

    /// The observed status code, if this is an [`UnexpectedStatus`](Self::UnexpectedStatus).
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus(status) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn display_texts() {
        assert_eq!(
            KvError::UnexpectedStatus(503).to_string(),
            "unexpected response status '503' received"
        );
        assert_eq!(KvError::KeyNotFound.to_string(), "key not found");
        assert_eq!(KvError::EngineUnsupported.to_string(), "engine unsupported");
        assert!(
            KvError::Decode(json_error())
                .to_string()
                .starts_with("failed to decode response body: ")
        );
        assert!(
            KvError::Encode(json_error())
                .to_string()
                .starts_with("failed to encode request body: ")
        );
    }

    #[test]
    fn transport_classification() {
        assert!(KvError::Decode(json_error()).is_transport());
        assert!(KvError::Encode(json_error()).is_transport());
        assert!(!KvError::UnexpectedStatus(500).is_transport());
        assert!(!KvError::KeyNotFound.is_transport());
        assert!(!KvError::EngineUnsupported.is_transport());
    }

    #[test]
    fn status_only_on_unexpected_status() {
        assert_eq!(KvError::UnexpectedStatus(204).status(), Some(204));
        assert_eq!(KvError::KeyNotFound.status(), None);
    }

    #[test]
    fn decode_exposes_source() {
        use std::error::Error as _;
        assert!(KvError::Decode(json_error()).source().is_some());
        assert!(KvError::KeyNotFound.source().is_none());
    }
}
