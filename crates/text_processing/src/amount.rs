//! Korean currency amount parsing
//!
//! Turns free-form Korean money expressions into integer won:
//! "2억 5천" -> 250,000,000, "800만" -> 8,000,000, "1,200,000" -> 1,200,000.
//! Never fails; unparseable input is 0.

use once_cell::sync::Lazy;
use regex::Regex;

/// Korean magnitude unit attached to a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KoreanUnit {
    /// 억 = 100,000,000 won
    Eok,
    /// 천 = 10,000,000 won, the sub-unit of 억 in price talk
    Cheon,
    /// 만 = 10,000 won
    Man,
}

impl KoreanUnit {
    fn multiplier(&self) -> f64 {
        match self {
            KoreanUnit::Eok => 100_000_000.0,
            KoreanUnit::Cheon => 10_000_000.0,
            KoreanUnit::Man => 10_000.0,
        }
    }
}

// A decimal number immediately followed by its unit character. Each unit is
// matched at most once; the first occurrence wins.
static UNIT_PATTERNS: Lazy<Vec<(Regex, KoreanUnit)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(\d+(?:\.\d+)?)억").unwrap(), KoreanUnit::Eok),
        (Regex::new(r"(\d+(?:\.\d+)?)천").unwrap(), KoreanUnit::Cheon),
        (Regex::new(r"(\d+(?:\.\d+)?)만").unwrap(), KoreanUnit::Man),
    ]
});

// A literal won figure, optionally comma-grouped.
static PLAIN_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,3}(?:,\d{3})+|\d+").unwrap());

/// Parse a Korean money expression into integer won.
///
/// Whitespace is ignored entirely. Each magnitude unit (억/천/만) is
/// matched at most once and contributes its number times its multiplier,
/// rounded to whole won. A plain numeral is searched for separately and the
/// result is the larger of the unit sum and that numeral, so a literal
/// figure is never combined with a stray unit match elsewhere in the text.
///
/// Malformed numerals (say, two decimal points) resolve to whatever the
/// first capture yields; that heuristic is accepted as-is.
pub fn parse_amount(text: &str) -> u64 {
    let compact: String = text.split_whitespace().collect();
    if compact.is_empty() {
        return 0;
    }

    let mut unit_sum: u64 = 0;
    for (pattern, unit) in UNIT_PATTERNS.iter() {
        if let Some(contribution) = unit_contribution(&compact, pattern, *unit) {
            unit_sum = unit_sum.saturating_add(contribution);
        }
    }

    let plain = PLAIN_NUMBER_PATTERN
        .find(&compact)
        .and_then(|m| m.as_str().replace(',', "").parse::<u64>().ok())
        .unwrap_or(0);

    unit_sum.max(plain)
}

fn unit_contribution(compact: &str, pattern: &Regex, unit: KoreanUnit) -> Option<u64> {
    let caps = pattern.captures(compact)?;
    let number: f64 = caps.get(1)?.as_str().parse().ok()?;
    Some((number * unit.multiplier()).round() as u64)
}
