//! Centralized constants for the housing agent
//!
//! Single source of truth for every tunable policy number in the advisory
//! rules and the FAQ matcher. `PolicyConfig` carries the same values with
//! YAML overrides; the constants here are its defaults. Real jurisdictions
//! vary most of these, so nothing below is inlined at a use site.

/// Monthly-rent lease conversion
pub mod lease_conversion {
    /// Months of rent counted into the converted transaction price
    ///
    /// Some jurisdictions use 70 below a combined 50,000,000-won threshold;
    /// that split is a known approximation we do not model.
    pub const RENT_FACTOR: u64 = 100;
}

/// Housing cost burden (rent-to-income)
pub mod burden {
    /// Warning threshold as a fraction of monthly income
    ///
    /// Above 30% is conventionally flagged as burdensome.
    pub const RIR_WARNING_RATIO: f64 = 0.30;
}

/// Brokerage fee rate brackets (중개보수 상한요율)
///
/// Selected against the converted transaction price. Bounds are inclusive;
/// jurisdiction-specific absolute fee caps are intentionally not applied.
pub mod brokerage {
    /// Bracket upper bounds in won with their rates, ascending
    pub const BRACKETS: [(u64, f64); 4] = [
        (50_000_000, 0.003),
        (100_000_000, 0.004),
        (600_000_000, 0.005),
        (900_000_000, 0.006),
    ];

    /// Rate above the last bracket bound
    pub const TOP_RATE: f64 = 0.008;
}

/// Move-in cost estimation
pub mod move_in {
    /// Flat moving/installation allowance in won
    pub const MOVING_COST_WON: u64 = 400_000;
}

/// FAQ retrieval
pub mod faq {
    /// Minimum bigram Jaccard similarity for a canned answer
    pub const MATCH_THRESHOLD: f64 = 0.8;
}
