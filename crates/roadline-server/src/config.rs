use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
///
/// Loadable from a TOML file; any omitted key falls back to its default.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Data directory holding the blockstore, index, and ledger files.
    pub data_dir: PathBuf,
    /// Override for the index document path. Defaults to
    /// `<data_dir>/cids.json` when unset.
    pub index_file: Option<PathBuf>,
    /// Browser origin allowed by CORS. `None` disables the CORS layer
    /// entirely (same-origin and non-browser clients only).
    pub cors_origin: Option<String>,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// When `true`, a successful store also records the new identifier as
    /// the category's latest on the ledger.
    pub anchor_on_store: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            data_dir: PathBuf::from("data"),
            index_file: None,
            cors_origin: Some("http://localhost:3000".to_string()),
            max_body_bytes: 2 * 1024 * 1024,
            anchor_on_store: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Effective path of the index document.
    pub fn index_path(&self) -> PathBuf {
        self.index_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("cids.json"))
    }

    /// Path of the ledger document.
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join("ledger.json")
    }
}
