//! Advisory Rule Engine
//!
//! Runs two independent checks over whatever money fields were extracted
//! from the utterance: rent burden against income, and upfront move-in
//! cost against cash on hand. A check whose inputs are missing is skipped,
//! not an error. Output ordering is fixed: check-1 lines before check-2
//! lines, and within a check facts before warnings.

use housing_agent_config::PolicyConfig;
use housing_agent_core::{financial, format_won, MoneyInputs, RuleResult};
use tracing::debug;

/// Rule engine over extracted money inputs
pub struct RuleEngine {
    policy: PolicyConfig,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Engine with the built-in policy numbers
    pub fn new() -> Self {
        Self {
            policy: PolicyConfig::default(),
        }
    }

    /// Engine with caller-supplied policy numbers
    pub fn with_policy(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    /// Evaluate every applicable check against the inputs.
    ///
    /// Pure and total: a check whose inputs are incomplete is skipped,
    /// and no input combination fails.
    pub fn evaluate(&self, inputs: &MoneyInputs) -> RuleResult {
        let mut result = RuleResult::default();

        self.check_rent_burden(inputs, &mut result);
        self.check_upfront_cost(inputs, &mut result);

        debug!(
            facts = result.facts.len(),
            warnings = result.warnings.len(),
            "advisory rules evaluated"
        );
        result
    }

    /// Rent-to-income burden check.
    ///
    /// Needs income and rent. Zero income skips the check rather than
    /// reporting a meaningless ratio. The warning quotes the ceiling of
    /// the percentage, no decimals.
    fn check_rent_burden(&self, inputs: &MoneyInputs, result: &mut RuleResult) {
        let (income, rent) = match (inputs.income_monthly, inputs.monthly_rent) {
            (Some(income), Some(rent)) if income > 0 => (income, rent),
            _ => return,
        };

        let ratio = financial::rent_to_income_ratio(rent, income);
        result
            .facts
            .push(format!("월세가 월 소득의 {:.1}%입니다.", ratio * 100.0));

        if ratio > self.policy.rir_warning_ratio {
            let percent = (ratio * 100.0).ceil() as u64;
            let threshold_percent = (self.policy.rir_warning_ratio * 100.0).round() as u64;
            result.warnings.push(format!(
                "주거비 비율이 {}%로 권장 상한 {}%를 넘습니다. 월세 부담을 낮추는 방안을 권합니다.",
                percent, threshold_percent
            ));
        }
    }

    /// Upfront move-in cost check.
    ///
    /// Needs rent, deposit, and cash on hand. Converts the lease to a
    /// transaction price, looks up the brokerage bracket rate, and adds
    /// one month's rent plus the flat moving allowance.
    fn check_upfront_cost(&self, inputs: &MoneyInputs, result: &mut RuleResult) {
        let (rent, deposit, cash) = match (inputs.monthly_rent, inputs.deposit, inputs.cash_on_hand)
        {
            (Some(rent), Some(deposit), Some(cash)) => (rent, deposit, cash),
            _ => return,
        };

        let price =
            financial::converted_lease_price(deposit, rent, self.policy.rent_conversion_factor);
        let rate = self.policy.brokerage_rate_for(price);
        let fee = financial::brokerage_fee(price, rate);
        let upfront = financial::upfront_move_in_cost(fee, rent, self.policy.moving_cost_won);

        result.facts.push(format!(
            "중개보수와 이사비를 포함한 예상 초기 비용은 약 {}원입니다.",
            format_won(upfront)
        ));

        if cash < upfront {
            let shortfall = upfront - cash;
            result.warnings.push(format!(
                "보유 현금이 예상 초기 비용 {}원에 미치지 못합니다. 약 {}원이 더 필요합니다.",
                format_won(upfront),
                format_won(shortfall)
            ));
        }
    }
}
