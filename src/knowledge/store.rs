//! Knowledge corpus with a load/append lifecycle over a [`Slot`].
//!
//! Persisted shape (pretty JSON, order preserved):
//! ```text
//! [
//!   { "keywords": ["criar", "imagem", "gerar"], "response": "..." },
//!   ...
//! ]
//! ```
//!
//! An empty slot is seeded from [`seed::corpus`] and written immediately.
//! A slot that cannot be read or parsed falls back to the seed in memory
//! only; the next successful append overwrites it.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::slot::Slot;
use super::{KnowledgeEntry, seed};
use crate::error::AppError;

/// What [`KnowledgeStore::load`] found in the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted corpus loaded; `rejected` malformed records were dropped.
    Loaded { entries: usize, rejected: usize },
    /// Slot was empty; the seed corpus was installed and persisted.
    Seeded { entries: usize },
    /// Slot was unreadable; the seed corpus is active in memory only.
    Recovered { entries: usize },
}

pub struct KnowledgeStore {
    slot: Arc<dyn Slot>,
    key: String,
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeStore {
    /// An unloaded, empty store bound to `key` in `slot`.
    pub fn new(slot: Arc<dyn Slot>, key: impl Into<String>) -> Self {
        Self { slot, key: key.into(), entries: Vec::new() }
    }

    /// [`new`](Self::new) followed by [`load`](Self::load).
    pub fn open(slot: Arc<dyn Slot>, key: impl Into<String>) -> Self {
        let mut store = Self::new(slot, key);
        store.load();
        store
    }

    /// Replace the in-memory corpus with whatever the slot holds.
    /// Never fails; see [`LoadOutcome`] for the fallbacks.
    pub fn load(&mut self) -> LoadOutcome {
        let stored = match self.slot.read(&self.key) {
            Ok(stored) => stored,
            Err(e) => return self.recover(e),
        };

        let Some(data) = stored else {
            self.entries = seed::corpus();
            if let Err(e) = self.persist() {
                error!(key = %self.key, error = %e, "failed to persist seed corpus");
            }
            info!(
                key = %self.key,
                slot = self.slot.slot_type(),
                entries = self.entries.len(),
                "knowledge slot empty — seed corpus installed"
            );
            return LoadOutcome::Seeded { entries: self.entries.len() };
        };

        match decode(&data) {
            Ok((entries, rejected)) => {
                if rejected > 0 {
                    warn!(key = %self.key, rejected, "dropped malformed knowledge records");
                }
                self.entries = entries;
                info!(
                    key = %self.key,
                    slot = self.slot.slot_type(),
                    entries = self.entries.len(),
                    "knowledge corpus loaded"
                );
                LoadOutcome::Loaded { entries: self.entries.len(), rejected }
            }
            Err(e) => self.recover(e),
        }
    }

    fn recover(&mut self, cause: AppError) -> LoadOutcome {
        warn!(key = %self.key, error = %cause, "knowledge slot unreadable — using seed corpus in memory");
        self.entries = seed::corpus();
        LoadOutcome::Recovered { entries: self.entries.len() }
    }

    /// Add `entry` and write the whole corpus through to the slot.
    ///
    /// A failed write is logged and swallowed: the in-memory corpus stays
    /// authoritative for the rest of the session.
    pub fn append(&mut self, entry: KnowledgeEntry) {
        self.entries.push(entry);
        match self.persist() {
            Ok(()) => debug!(key = %self.key, entries = self.entries.len(), "knowledge corpus persisted"),
            Err(e) => error!(
                key = %self.key,
                error = %e,
                "failed to persist knowledge corpus — new entry kept in memory only"
            ),
        }
    }

    /// All entries in insertion order.
    pub fn all(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    fn persist(&self) -> Result<(), AppError> {
        let data = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::Knowledge(format!("serialise corpus: {e}")))?;
        self.slot.write(&self.key, &data)
    }
}

/// Parse a persisted corpus. Returns the valid entries and the number of
/// records that had to be dropped.
fn decode(data: &str) -> Result<(Vec<KnowledgeEntry>, usize), AppError> {
    let records: Vec<Value> = serde_json::from_str(data)
        .map_err(|e| AppError::Knowledge(format!("malformed corpus: {e}")))?;

    let mut rejected = 0;
    let entries = records
        .into_iter()
        .filter_map(|record| {
            let entry = validate(record);
            if entry.is_none() {
                rejected += 1;
            }
            entry
        })
        .collect();
    Ok((entries, rejected))
}

/// A record needs a `keywords` array and a string `response`. Non-string
/// keyword items are dropped rather than failing the record.
fn validate(record: Value) -> Option<KnowledgeEntry> {
    let Value::Object(mut fields) = record else {
        return None;
    };
    let Some(Value::String(response)) = fields.remove("response") else {
        return None;
    };
    let Some(Value::Array(raw_keywords)) = fields.remove("keywords") else {
        return None;
    };
    let keywords = raw_keywords
        .into_iter()
        .filter_map(|k| match k {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();
    Some(KnowledgeEntry { keywords, response })
}
