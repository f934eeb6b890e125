//! FAQ retrieval for the housing agent
//!
//! Matches a user utterance against a fixed question catalog using
//! character-bigram Jaccard similarity. See [`FaqMatcher`].

mod matcher;

pub use matcher::FaqMatcher;
