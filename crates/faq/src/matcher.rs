//! Bigram-similarity FAQ matching
//!
//! Retrieval is a character-bigram Jaccard score over normalized text,
//! gated by a minimum similarity; no embeddings, no index. The catalog
//! is scanned in its given order and never mutated.

use std::collections::HashSet;

use housing_agent_config::constants;
use housing_agent_core::{FaqItem, FaqMatch};
use housing_agent_text_processing::normalize_for_match;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// FAQ matcher with a minimum-similarity gate
pub struct FaqMatcher {
    /// Minimum Jaccard similarity for a hit
    threshold: f64,
}

impl Default for FaqMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FaqMatcher {
    /// Matcher with the default threshold
    pub fn new() -> Self {
        Self {
            threshold: constants::faq::MATCH_THRESHOLD,
        }
    }

    /// Matcher with a caller-supplied threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Best catalog entry for the query, if any clears the threshold.
    ///
    /// The catalog is scanned in its given order and only a strictly
    /// better score replaces the running best, so exact ties keep the
    /// earliest entry. None tells the caller to fall through to another
    /// response lane.
    pub fn best_match(&self, query: &str, catalog: &[FaqItem]) -> Option<FaqMatch> {
        let query_bigrams = bigrams(&normalize_for_match(query));

        let mut best: Option<(usize, f64)> = None;
        for (index, item) in catalog.iter().enumerate() {
            let question_bigrams = bigrams(&normalize_for_match(&item.question));
            let score = jaccard(&query_bigrams, &question_bigrams);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best?;
        if score < self.threshold {
            debug!(best_score = score, "no FAQ entry cleared the threshold");
            return None;
        }

        debug!(index, score, "FAQ match");
        Some(FaqMatch {
            item: catalog[index].clone(),
            score,
            index,
        })
    }
}

/// Set of contiguous two-grapheme substrings of a normalized string
fn bigrams(text: &str) -> HashSet<String> {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    graphemes.windows(2).map(|pair| pair.concat()).collect()
}

/// Jaccard coefficient of two bigram sets; two empty sets score 0, not 1
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
