//! `trogon-kv`: read and write secrets in a KV v2 mount from the shell.
//!
//! # Environment variables
//!
//! | Variable            | Default                 | Description                       |
//! |---------------------|-------------------------|-----------------------------------|
//! | `VAULT_ADDR`        | `http://127.0.0.1:8200` | Base address of the server        |
//! | `VAULT_KV_MOUNT`    | `secret`                | KV v2 mount name                  |
//! | `VAULT_TOKEN`       | -                       | Bearer token (required)           |
//! | `VAULT_SKIP_VERIFY` | `false`                 | Accept self-signed certificates   |
//! | `RUST_LOG`          | `info`                  | Log filter (tracing-subscriber)   |

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use trogon_kv::{KvClient, KvConfig, KvStore, Record};
use trogon_std::env::SystemEnv;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server health endpoint
    Ping,
    /// Print the record stored under KEY as JSON
    Get { key: String },
    /// Store a JSON object under KEY
    Set { key: String, record: String },
    /// Delete the record stored under KEY
    Delete { key: String },
}

fn parse_record(raw: &str) -> Result<Record> {
    match serde_json::from_str::<Value>(raw).context("record is not valid JSON")? {
        Value::Object(record) => Ok(record),
        _ => bail!("record must be a JSON object"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Reject bad input before touching the network.
    let pending_record = match &args.command {
        Command::Set { record, .. } => Some(parse_record(record)?),
        _ => None,
    };

    let config = KvConfig::from_env(&SystemEnv)?;
    tracing::info!(addr = %config.addr(), mount = %config.engine(), "Connecting to KV mount");

    let kv = KvClient::new(config).await.context("failed to open KV mount")?;

    match args.command {
        Command::Ping => {
            kv.ping().await?;
            tracing::info!("Server is healthy");
        }
        Command::Get { key } => {
            let record = kv
                .get(&key)
                .await
                .with_context(|| format!("failed to read '{key}'"))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Set { key, .. } => {
            let record = pending_record.unwrap_or_default();
            kv.set(&key, &record)
                .await
                .with_context(|| format!("failed to write '{key}'"))?;
            tracing::info!(key = %key, "Record written");
        }
        Command::Delete { key } => {
            kv.delete(&key)
                .await
                .with_context(|| format!("failed to delete '{key}'"))?;
            tracing::info!(key = %key, "Record deleted");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record_accepts_objects() {
        let record = parse_record(r#"{"user":"admin","port":5432}"#).unwrap();
        assert_eq!(record["user"], "admin");
        assert_eq!(record["port"], 5432);
    }

    #[test]
    fn parse_record_rejects_non_objects() {
        assert!(parse_record("[1,2]").is_err());
        assert!(parse_record("\"str\"").is_err());
        assert!(parse_record("{broken").is_err());
    }

    #[test]
    fn args_parse_subcommands() {
        let args = Args::try_parse_from(["trogon-kv", "set", "app/db", r#"{"a":1}"#]).unwrap();
        assert!(matches!(args.command, Command::Set { ref key, .. } if key == "app/db"));

        let args = Args::try_parse_from(["trogon-kv", "ping"]).unwrap();
        assert!(matches!(args.command, Command::Ping));

        assert!(Args::try_parse_from(["trogon-kv", "get"]).is_err());
    }
}
