//! Assistant engine — answers one utterance at a time.
//!
//! ```text
//! normalize → best_match ─┬─ hit ──────────────────────────────► response
//!                         └─ miss ─┬─ offline ─────────────────► not_yet_known
//!                                  └─ online → generate_text ─┬─ ok ──► learn, response
//!                                                             └─ err ─► online_failure
//! ```
//!
//! `respond` always yields a string. The store lock is held only for the
//! synchronous match and learn steps, never across the online call.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::config::Replies;
use crate::knowledge::{self, KnowledgeEntry, KnowledgeStore, best_match, normalize};
use crate::llm::TextGenerator;

pub struct AssistantEngine<G> {
    store: Mutex<KnowledgeStore>,
    generator: G,
    replies: Replies,
}

impl<G: TextGenerator> AssistantEngine<G> {
    /// `store` should already be loaded.
    pub fn new(store: KnowledgeStore, generator: G, replies: Replies) -> Self {
        Self { store: Mutex::new(store), generator, replies }
    }

    /// Answer `utterance`. `online` is the caller's connectivity flag; the
    /// engine never probes the network itself.
    pub async fn respond(&self, utterance: &str, online: bool) -> String {
        let normalized = normalize(utterance);

        if let Some(response) = self.local_answer(&normalized) {
            return response;
        }

        if !online {
            debug!("no local match while offline");
            return self.replies.not_yet_known.clone();
        }

        info!(utterance_len = utterance.len(), "no local match — asking online");
        match self.generator.generate_text(utterance).await {
            Ok(answer) => {
                knowledge::learn(utterance, &answer, &mut self.store());
                answer
            }
            Err(e) => {
                warn!(error = %e, "online answer failed — nothing learned");
                self.replies.online_failure.clone()
            }
        }
    }

    fn local_answer(&self, normalized: &str) -> Option<String> {
        let store = self.store();
        let hit = best_match(normalized, store.all())?;
        debug!(entry = hit.index, score = hit.score, "local knowledge match");
        Some(hit.response.to_string())
    }

    /// Number of entries currently known.
    pub fn knowledge_len(&self) -> usize {
        self.store().all().len()
    }

    /// Copy of the current corpus, in insertion order.
    pub fn snapshot(&self) -> Vec<KnowledgeEntry> {
        self.store().all().to_vec()
    }

    pub fn replies(&self) -> &Replies {
        &self.replies
    }

    // A panic mid-append leaves the corpus a valid Vec, so a poisoned lock is still usable.
    fn store(&self) -> MutexGuard<'_, KnowledgeStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
