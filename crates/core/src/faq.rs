//! FAQ catalog entries and match results

use serde::{Deserialize, Serialize};

/// One canned question/answer pair from the FAQ catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Canonical question text
    pub question: String,
    /// Canned answer the chat layer renders verbatim
    pub answer: String,
}

/// Best catalog entry for a query
///
/// Ephemeral: produced per query, handed to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqMatch {
    /// The matched catalog entry
    pub item: FaqItem,
    /// Bigram Jaccard similarity in [0, 1]
    pub score: f64,
    /// Position of the entry in the catalog it was matched against
    pub index: usize,
}
