use std::sync::Arc;

use roadline_index::IndexFile;
use roadline_ledger::FileLedger;
use roadline_sdk::Roadline;
use roadline_store::FsBlobStore;

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared per-request state: the composed stack plus the store-time
/// anchoring switch.
#[derive(Clone)]
pub struct AppState {
    pub roadline: Arc<Roadline>,
    pub anchor_on_store: bool,
}

impl AppState {
    /// Build the filesystem-backed stack described by `config`.
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let store = FsBlobStore::open(&config.data_dir)?;
        let index = IndexFile::open(config.index_path())?;
        let ledger = FileLedger::open(config.ledger_path())?;

        Ok(Self {
            roadline: Arc::new(Roadline::new(Arc::new(store), index, Arc::new(ledger))),
            anchor_on_store: config.anchor_on_store,
        })
    }
}
