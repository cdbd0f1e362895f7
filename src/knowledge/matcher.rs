//! Keyword-overlap scoring.
//!
//! An entry scores one point per keyword present in the utterance's token
//! set. The highest score wins; on a tie the earliest entry wins. Any score
//! above zero is a match, however many keywords the entry carries.

use std::collections::HashSet;

use super::{KnowledgeEntry, tokens};

/// The winning entry for an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Position of the entry in the corpus.
    pub index: usize,
    pub score: usize,
    pub response: &'a str,
}

/// Number of `entry` keywords present in `token_set`.
pub fn score(entry: &KnowledgeEntry, token_set: &HashSet<&str>) -> usize {
    entry
        .keywords
        .iter()
        .filter(|k| token_set.contains(k.as_str()))
        .count()
}

/// Best-scoring entry for an already normalized utterance, or `None` when
/// no keyword of any entry appears in it.
pub fn best_match<'a>(normalized: &str, entries: &'a [KnowledgeEntry]) -> Option<Match<'a>> {
    let token_set: HashSet<&str> = tokens(normalized).collect();
    if token_set.is_empty() {
        return None;
    }

    let mut best: Option<Match<'a>> = None;
    for (index, entry) in entries.iter().enumerate() {
        let s = score(entry, &token_set);
        // strict `>` keeps the earlier entry on ties
        if s > best.map_or(0, |b| b.score) {
            best = Some(Match { index, score: s, response: &entry.response });
        }
    }
    best
}
