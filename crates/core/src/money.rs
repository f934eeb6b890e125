//! Extracted money fields and won formatting
//!
//! All amounts anywhere in this workspace are non-negative integer won.
//! Rounding happens before a value reaches these types.

use serde::{Deserialize, Serialize};

/// Money amounts recovered from a single utterance
///
/// Absent means "not mentioned in the text", which is different from a
/// mentioned zero. Fields are independent; any subset may be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyInputs {
    /// Monthly income (월소득), in won
    pub income_monthly: Option<u64>,
    /// Monthly rent (월세), in won
    pub monthly_rent: Option<u64>,
    /// Lease deposit (보증금), in won
    pub deposit: Option<u64>,
    /// Liquid cash available for move-in (보유 현금), in won
    pub cash_on_hand: Option<u64>,
}

impl MoneyInputs {
    /// Check if no field was extracted
    pub fn is_empty(&self) -> bool {
        self.income_monthly.is_none()
            && self.monthly_rent.is_none()
            && self.deposit.is_none()
            && self.cash_on_hand.is_none()
    }
}

/// Format a won amount with thousands separators ("1650000" -> "1,650,000")
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}
