//! Topic Classification
//!
//! Keyword and pattern predicates that pick the handling lane for an
//! utterance. All three are total substring predicates over the raw
//! text; no model, no tokenizer.

use once_cell::sync::Lazy;
use regex::Regex;

use housing_agent_text_processing::content_char_count;

/// Housing-domain markers checked as plain substrings of the lowercased text
const REAL_ESTATE_KEYWORDS: &[&str] = &[
    "전세",
    "월세",
    "매매",
    "주담대",
    "ltv",
    "dsr",
    "등기",
    "잔금",
    "대출",
    "금리",
    "보증금",
    "청약",
    "분양",
    "중도금",
    "임대차",
    "재개발",
    "재건축",
    "계약금",
    "중개보수",
    "확정일자",
];

/// Repayment-structure and limit markers for the analytical lane
const ANALYTICAL_KEYWORDS: &[&str] = &[
    "체증식",
    "원리금균등",
    "원금균등",
    "거치",
    "ltv",
    "dsr",
    "한도",
    "갈아타기",
    "중도상환",
    "고정금리",
    "변동금리",
];

/// Loan terms quoted in years. The leading guard keeps "2030년" from
/// reading as a 30-year term.
static TERM_YEARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\D)(5|10|15|20|30)\s*년").unwrap());

/// A year figure is a loan term only next to one of these
const TERM_CONTEXT_WORDS: &[&str] = &["상환", "원리금", "체증", "만기"];

/// A percentage figure, integer or decimal
static PERCENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?\s*%").unwrap());

/// A percentage is a rate/ratio statement only next to one of these
const RATE_CONTEXT_WORDS: &[&str] = &["금리", "상환", "dsr", "ltv"];

/// Check whether the text carries too little content to act on.
///
/// Whitespace, punctuation, symbols, and emoji do not count; fewer than
/// two letters/digits surviving means the agent should ask for more.
pub fn is_low_info(text: &str) -> bool {
    content_char_count(text) < 2
}

/// Check whether the text mentions the housing/real-estate domain at all
pub fn is_real_estate_query(text: &str) -> bool {
    let lowered = text.to_lowercase();
    REAL_ESTATE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Check whether the text asks for calculation or comparison.
///
/// Fires on a repayment-structure keyword, on a loan term in years next
/// to a repayment word, or on a percentage next to a rate/ratio word.
/// Routes toward the advisory lane instead of a canned answer.
pub fn is_analytical_topic(text: &str) -> bool {
    let lowered = text.to_lowercase();

    if ANALYTICAL_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        return true;
    }

    if TERM_YEARS_PATTERN.is_match(&lowered)
        && TERM_CONTEXT_WORDS.iter().any(|word| lowered.contains(word))
    {
        return true;
    }

    PERCENT_PATTERN.is_match(&lowered)
        && RATE_CONTEXT_WORDS.iter().any(|word| lowered.contains(word))
}
