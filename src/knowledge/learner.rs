//! Turning an online answer into a permanent corpus entry.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{KnowledgeEntry, KnowledgeStore, normalize, tokens};

/// Tokens of at most this many characters are not kept as keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Significant tokens of `raw`, deduplicated, in first-seen order.
pub fn extract_keywords(raw: &str) -> Vec<String> {
    let normalized = normalize(raw);
    let mut seen = HashSet::new();
    tokens(&normalized)
        .filter(|t| t.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|t| seen.insert(*t))
        .map(str::to_string)
        .collect()
}

/// Append a new entry mapping the keywords of `utterance` to `response`.
///
/// Entries are never merged: re-learning an overlapping question adds
/// another entry, and the older one keeps winning ties.
pub fn learn(utterance: &str, response: &str, store: &mut KnowledgeStore) {
    let keywords = extract_keywords(utterance);
    if keywords.is_empty() {
        debug!("learned entry has no keywords and can never match");
    }
    let keyword_count = keywords.len();
    store.append(KnowledgeEntry { keywords, response: response.to_string() });
    info!(keywords = keyword_count, entries = store.all().len(), "learned new knowledge entry");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::knowledge::{TmpSlot, best_match};

    #[test]
    fn short_tokens_are_dropped() {
        assert_eq!(extract_keywords("O que é um Rust trait?"), vec!["que", "rust", "trait"]);
    }

    #[test]
    fn keywords_are_deduplicated_in_order() {
        assert_eq!(
            extract_keywords("Promise? promise, async PROMISE await async"),
            vec!["promise", "async", "await"]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // "é" + "à" is two chars but four bytes
        assert!(extract_keywords("éà").is_empty());
        assert_eq!(extract_keywords("ação"), vec!["ação"]);
    }

    #[test]
    fn learn_appends_and_becomes_matchable() {
        let mut store = KnowledgeStore::open(Arc::new(TmpSlot::new()), "learn_test");
        let before = store.all().len();
        learn("What is a Rust lifetime?", "A lifetime bounds a borrow.", &mut store);
        assert_eq!(store.all().len(), before + 1);

        let learned = store.all().last().unwrap();
        assert_eq!(learned.keywords, vec!["what", "rust", "lifetime"]);
        assert_eq!(learned.response, "A lifetime bounds a borrow.");

        let m = best_match(&normalize("explain lifetime please"), store.all()).unwrap();
        assert_eq!(m.response, "A lifetime bounds a borrow.");
    }

    #[test]
    fn overlapping_questions_are_not_merged() {
        let mut store = KnowledgeStore::open(Arc::new(TmpSlot::new()), "dup_test");
        let before = store.all().len();
        learn("tokio runtime", "first answer", &mut store);
        learn("tokio runtime", "second answer", &mut store);
        assert_eq!(store.all().len(), before + 2);
        let m = best_match("tokio runtime", store.all()).unwrap();
        assert_eq!(m.response, "first answer");
    }
}
