//! Local keyword knowledge base.
//!
//! A corpus of [`KnowledgeEntry`] records (trigger keywords → canned reply),
//! persisted in a [`Slot`](slot::Slot) under a fixed key. Utterances are
//! normalized with [`normalize`] before both matching and learning so the two
//! sides always agree on what a token is.

pub mod learner;
pub mod matcher;
pub mod seed;
pub mod slot;
pub mod store;

use serde::{Deserialize, Serialize};

pub use learner::{extract_keywords, learn};
pub use matcher::{Match, best_match};
pub use slot::{FileSlot, Slot, TmpSlot};
pub use store::{KnowledgeStore, LoadOutcome};

/// One trigger-keyword set and the reply it unlocks.
///
/// Never mutated after creation. Keyword order is kept as written so the
/// persisted form round-trips byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub keywords: Vec<String>,
    pub response: String,
}

impl KnowledgeEntry {
    pub fn new<I, S>(keywords: I, response: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            response: response.into(),
        }
    }
}

/// Lowercase `raw` and drop every character that is neither alphanumeric,
/// `_`, nor whitespace.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Whitespace-delimited tokens of an already normalized utterance.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
