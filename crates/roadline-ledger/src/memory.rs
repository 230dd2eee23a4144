use std::collections::HashMap;
use std::sync::RwLock;

use roadline_types::RecordCategory;

use crate::error::{LedgerError, LedgerResult};
use crate::traits::{validate_identifier, Ledger};

/// In-memory ledger slots for tests and embedding. State is lost when the
/// ledger is dropped.
#[derive(Debug)]
pub struct InMemoryLedger {
    slots: RwLock<HashMap<RecordCategory, String>>,
}

impl InMemoryLedger {
    /// Create a new ledger with every slot unset.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for InMemoryLedger {
    fn record(&self, category: RecordCategory, cid: &str) -> LedgerResult<()> {
        validate_identifier(cid)?;
        let mut slots = self.slots.write().map_err(|_| LedgerError::LockPoisoned)?;
        slots.insert(category, cid.to_string());
        Ok(())
    }

    fn latest(&self, category: RecordCategory) -> LedgerResult<Option<String>> {
        let slots = self.slots.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(slots.get(&category).cloned())
    }
}
