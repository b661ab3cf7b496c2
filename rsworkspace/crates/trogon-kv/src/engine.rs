//! Mount compatibility check performed once when a client is constructed.
//!
//! `GET /v1/sys/mounts/{engine}` answers with something like:
//!
//! ```json
//! {"data": {"type": "kv", "options": {"version": "2"}}}
//! ```

use serde_json::Value;

use crate::error::KvError;
use crate::store::Record;

/// The only KV engine version this client speaks.
pub const SUPPORTED_ENGINE_VERSION: u32 = 2;

/// Engine type reported by KV mounts.
pub const KV_ENGINE_TYPE: &str = "kv";

/// What the mount introspection reported about the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineDescriptor {
    pub engine_type: String,
    pub version: String,
}

/// Validate a mount-introspection body.
///
/// Succeeds only when `data.type` is `"kv"` and `data.options.version` is the
/// string form of [`SUPPORTED_ENGINE_VERSION`]. Anything missing, mistyped or
/// different is [`KvError::EngineUnsupported`].
pub fn check_engine(body: &Record) -> Result<EngineDescriptor, KvError> {
    let data = body
        .get("data")
        .and_then(Value::as_object)
        .ok_or(KvError::EngineUnsupported)?;

    let engine_type = data.get("type").and_then(Value::as_str);
    if engine_type != Some(KV_ENGINE_TYPE) {
        return Err(KvError::EngineUnsupported);
    }

    let options = data
        .get("options")
        .and_then(Value::as_object)
        .ok_or(KvError::EngineUnsupported)?;

    // A numeric `2` is not accepted; mounts report the version as a string.
    let version = options.get("version").and_then(Value::as_str);
    if version != Some(SUPPORTED_ENGINE_VERSION.to_string().as_str()) {
        return Err(KvError::EngineUnsupported);
    }

    Ok(EngineDescriptor {
        engine_type: KV_ENGINE_TYPE.to_string(),
        version: SUPPORTED_ENGINE_VERSION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        match v {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn unsupported(v: Value) -> bool {
        matches!(check_engine(&record(v)), Err(KvError::EngineUnsupported))
    }

    #[test]
    fn accepts_kv_v2() {
        let descriptor = check_engine(&record(json!({
            "data": {"type": "kv", "options": {"version": "2"}, "description": ""}
        })))
        .unwrap();

        assert_eq!(descriptor.engine_type, "kv");
        assert_eq!(descriptor.version, "2");
    }

    #[test]
    fn rejects_kv_v1() {
        assert!(unsupported(json!({"data": {"type": "kv", "options": {"version": "1"}}})));
    }

    #[test]
    fn rejects_other_engine_types() {
        assert!(unsupported(json!({"data": {"type": "transit", "options": {"version": "2"}}})));
    }

    #[test]
    fn rejects_numeric_version() {
        assert!(unsupported(json!({"data": {"type": "kv", "options": {"version": 2}}})));
    }

    #[test]
    fn rejects_missing_data() {
        assert!(unsupported(json!({})));
        assert!(unsupported(json!({"data": "kv"})));
    }

    #[test]
    fn rejects_missing_type() {
        assert!(unsupported(json!({"data": {"options": {"version": "2"}}})));
    }

    #[test]
    fn rejects_missing_or_null_options() {
        assert!(unsupported(json!({"data": {"type": "kv"}})));
        assert!(unsupported(json!({"data": {"type": "kv", "options": null}})));
    }

    #[test]
    fn rejects_missing_version() {
        assert!(unsupported(json!({"data": {"type": "kv", "options": {}}})));
    }
}
