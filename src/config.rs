//! Server configuration.
//!
//! Layered, lowest precedence first:
//!
//! 1. built-in defaults;
//! 2. `anagramd.toml` (or `.json`, `.yaml`) in the working directory if it
//!    exists, or the file passed with `--config`, which must exist;
//! 3. `ANAGRAMD__*` environment variables, e.g. `ANAGRAMD__PORT=9000` or
//!    `ANAGRAMD__QUERY_MODE=decoded`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::query::QueryMode;
use crate::telemetry::LogFormat;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// File served by `GET /secret`.
    #[serde(default = "default_secret_path")]
    pub secret_path: PathBuf,

    /// How `p` is read from `/anagram` query strings.
    #[serde(default)]
    pub query_mode: QueryMode,

    /// Default filter directive; `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            secret_path: default_secret_path(),
            query_mode: QueryMode::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Loads the layered configuration. `file` replaces the optional
    /// `anagramd.*` lookup and is required to exist.
    pub fn load(file: Option<&Path>) -> Result<Self, Error> {
        let source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("anagramd").required(false),
        };

        let config = config::Config::builder()
            .add_source(source)
            .add_source(
                config::Environment::with_prefix("ANAGRAMD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Applies a command-line `--port`, which beats every configured layer.
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        let addr = format!("{}:{}", self.bind_addr, self.port);
        addr.parse().map_err(|source| Error::Addr { addr, source })
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8088
}

fn default_secret_path() -> PathBuf {
    PathBuf::from("/tmp/secret.key")
}

fn default_log_level() -> String {
    "info".to_string()
}
