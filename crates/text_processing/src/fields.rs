//! Labeled money-field extraction
//!
//! Scans an utterance for the four money concepts the advisory rules
//! consume (rent, deposit, income, cash), each anchored to a small set of
//! Korean label synonyms. The fragment after a label is parsed with
//! [`parse_amount`]. A label that never appears leaves its field absent,
//! never zero.

use housing_agent_core::MoneyInputs;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::amount::parse_amount;

// Label synonyms followed by an amount fragment. The fragment must start
// with a digit and may continue with digits, commas, magnitude characters,
// and interior whitespace. Only the leftmost match per concept is used.
static RENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"월\s?세\s*([0-9][0-9,억천만\s]*)").unwrap());

static DEPOSIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"보증\s?금\s*([0-9][0-9,억천만\s]*)").unwrap());

static INCOME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:월소득|월수입|소득|수입)\s*([0-9][0-9,억천만\s]*)").unwrap());

static CASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:보유 현금|가용 현금|현금)\s*([0-9][0-9,억천만\s]*)").unwrap());

/// Labeled money-field extractor
pub struct FieldExtractor;

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract every labeled money field from an utterance.
    ///
    /// The four searches are independent; no field is inferred from
    /// another's value.
    pub fn extract(&self, utterance: &str) -> MoneyInputs {
        let lowered = utterance.to_lowercase();

        let inputs = MoneyInputs {
            income_monthly: labeled_amount(&lowered, &INCOME_PATTERN),
            monthly_rent: labeled_amount(&lowered, &RENT_PATTERN),
            deposit: labeled_amount(&lowered, &DEPOSIT_PATTERN),
            cash_on_hand: labeled_amount(&lowered, &CASH_PATTERN),
        };
        if !inputs.is_empty() {
            debug!(?inputs, "extracted money fields");
        }
        inputs
    }
}

fn labeled_amount(lowered: &str, pattern: &Regex) -> Option<u64> {
    let caps = pattern.captures(lowered)?;
    let fragment = caps.get(1)?.as_str();
    Some(parse_amount(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rent_and_deposit() {
        let extractor = FieldExtractor::new();
        let inputs = extractor.extract("월세 50만 보증금 2억");

        assert_eq!(inputs.monthly_rent, Some(500_000));
        assert_eq!(inputs.deposit, Some(200_000_000));
        assert_eq!(inputs.income_monthly, None);
        assert_eq!(inputs.cash_on_hand, None);
    }

    #[test]
    fn test_extract_all_four() {
        let extractor = FieldExtractor::new();
        let inputs =
            extractor.extract("월소득 300만이고 월세 50만, 보증금 1억, 현금 1000만 있어요");

        assert_eq!(inputs.income_monthly, Some(3_000_000));
        assert_eq!(inputs.monthly_rent, Some(500_000));
        assert_eq!(inputs.deposit, Some(100_000_000));
        assert_eq!(inputs.cash_on_hand, Some(10_000_000));
    }

    #[test]
    fn test_label_with_interior_space() {
        let extractor = FieldExtractor::new();
        let inputs = extractor.extract("월 세 45만에 보증 금 5000만");

        assert_eq!(inputs.monthly_rent, Some(450_000));
        assert_eq!(inputs.deposit, Some(50_000_000));
    }

    #[test]
    fn test_income_synonyms() {
        let extractor = FieldExtractor::new();

        assert_eq!(
            extractor.extract("수입 250만 정도예요").income_monthly,
            Some(2_500_000)
        );
        assert_eq!(
            extractor.extract("월수입 420만").income_monthly,
            Some(4_200_000)
        );
    }

    #[test]
    fn test_cash_synonyms() {
        let extractor = FieldExtractor::new();

        assert_eq!(
            extractor.extract("보유 현금 2000만").cash_on_hand,
            Some(20_000_000)
        );
        assert_eq!(
            extractor.extract("가용 현금 500만").cash_on_hand,
            Some(5_000_000)
        );
    }

    #[test]
    fn test_first_match_wins() {
        let extractor = FieldExtractor::new();
        let inputs = extractor.extract("월세 50만... 아니다 월세 60만");

        assert_eq!(inputs.monthly_rent, Some(500_000));
    }

    #[test]
    fn test_label_without_number_is_absent() {
        let extractor = FieldExtractor::new();
        let inputs = extractor.extract("월세가 너무 비싸요");

        assert!(inputs.is_empty());
    }

    #[test]
    fn test_no_labels() {
        let extractor = FieldExtractor::new();
        assert!(extractor.extract("그냥 집 구경하고 있어요").is_empty());
        assert!(extractor.extract("").is_empty());
    }
}
