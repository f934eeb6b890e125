//! Housing Finance Calculations
//!
//! Single source of truth for the arithmetic behind the advisory rules:
//! rent burden, lease price conversion, brokerage fees, and move-in cost.
//! Policy numbers (conversion factor, bracket rates) are passed in by the
//! caller; nothing here reads configuration.

/// Calculate the rent-to-income ratio (RIR).
///
/// RIR = monthly_rent / income_monthly
///
/// # Arguments
/// * `monthly_rent` - Monthly rent in won
/// * `income_monthly` - Monthly income in won (must be positive)
///
/// # Returns
/// Ratio as a fraction (0.333... for a third of income), or 0.0 if income
/// is zero
pub fn rent_to_income_ratio(monthly_rent: u64, income_monthly: u64) -> f64 {
    if income_monthly == 0 {
        return 0.0;
    }
    monthly_rent as f64 / income_monthly as f64
}

/// Calculate the converted transaction price of a monthly-rent lease.
///
/// price = deposit + monthly_rent x rent_factor
///
/// Brokerage fees on monthly-rent leases are assessed against this
/// converted price. The customary factor is 100 months of rent; some
/// jurisdictions use 70 below a combined threshold, which is not modeled.
///
/// # Arguments
/// * `deposit` - Lease deposit in won
/// * `monthly_rent` - Monthly rent in won
/// * `rent_factor` - Months of rent counted into the price
pub fn converted_lease_price(deposit: u64, monthly_rent: u64, rent_factor: u64) -> u64 {
    deposit.saturating_add(monthly_rent.saturating_mul(rent_factor))
}

/// Calculate the brokerage fee upper bound at a bracket rate.
///
/// fee = price x rate
///
/// # Arguments
/// * `price` - Converted transaction price in won
/// * `rate` - Bracket rate as a fraction (0.004 for 0.4%)
pub fn brokerage_fee(price: u64, rate: f64) -> f64 {
    if rate <= 0.0 {
        return 0.0;
    }
    price as f64 * rate
}

/// Calculate the estimated cash needed on move-in day.
///
/// upfront = round(brokerage fee + one month's rent + moving cost)
///
/// # Arguments
/// * `brokerage_fee` - Fee estimate in won (may carry fractions)
/// * `monthly_rent` - Monthly rent in won
/// * `moving_cost` - Flat moving/installation allowance in won
///
/// # Returns
/// Whole won, rounded to the nearest integer
pub fn upfront_move_in_cost(brokerage_fee: f64, monthly_rent: u64, moving_cost: u64) -> u64 {
    (brokerage_fee + monthly_rent as f64 + moving_cost as f64).round() as u64
}
