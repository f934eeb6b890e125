//! Korean text processing for the housing agent
//!
//! Deterministic, regex-based NLU: money amount parsing, labeled field
//! extraction, and the normalization used by similarity matching. No
//! morphological analysis, no models.

pub mod amount;
pub mod fields;
pub mod normalize;

pub use amount::parse_amount;
pub use fields::FieldExtractor;
pub use normalize::{content_char_count, normalize_for_match};
