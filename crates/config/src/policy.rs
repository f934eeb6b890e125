//! Policy configuration with YAML overrides
//!
//! Defaults come from [`crate::constants`]; a deployment may override any
//! subset of values through a YAML file. Loading is the only fallible
//! surface in the workspace.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants;

/// Error loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One brokerage fee bracket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeBracket {
    /// Inclusive upper bound on the converted transaction price, in won
    pub max_price_won: u64,
    /// Fee rate as a fraction (0.004 for 0.4%)
    pub rate: f64,
}

/// Tunable policy numbers for the advisory rules and FAQ matching
///
/// Every field has a default drawn from [`crate::constants`]; a YAML
/// override file only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Months of rent counted into the converted lease price
    pub rent_conversion_factor: u64,
    /// Rent-to-income warning threshold as a fraction
    pub rir_warning_ratio: f64,
    /// Flat move-in allowance in won
    pub moving_cost_won: u64,
    /// Brokerage brackets, ascending by bound
    pub brokerage_brackets: Vec<FeeBracket>,
    /// Rate above the last bracket bound
    pub brokerage_top_rate: f64,
    /// Minimum similarity for a FAQ match
    pub faq_match_threshold: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            rent_conversion_factor: constants::lease_conversion::RENT_FACTOR,
            rir_warning_ratio: constants::burden::RIR_WARNING_RATIO,
            moving_cost_won: constants::move_in::MOVING_COST_WON,
            brokerage_brackets: constants::brokerage::BRACKETS
                .iter()
                .map(|&(max_price_won, rate)| FeeBracket {
                    max_price_won,
                    rate,
                })
                .collect(),
            brokerage_top_rate: constants::brokerage::TOP_RATE,
            faq_match_threshold: constants::faq::MATCH_THRESHOLD,
        }
    }
}

impl PolicyConfig {
    /// Load policy overrides from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        let policy = Self::from_yaml_str(&content)?;
        debug!(path = %path.as_ref().display(), "loaded policy config");
        Ok(policy)
    }

    /// Parse policy overrides from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Brokerage rate for a converted transaction price
    ///
    /// Brackets are checked in order against their inclusive upper bounds;
    /// a price above every bound gets the top rate.
    pub fn brokerage_rate_for(&self, price_won: u64) -> f64 {
        for bracket in &self.brokerage_brackets {
            if price_won <= bracket.max_price_won {
                return bracket.rate;
            }
        }
        self.brokerage_top_rate
    }
}
