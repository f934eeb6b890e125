//! Advisory rules for the housing agent
//!
//! Turns extracted money inputs into Korean-language facts and warnings
//! about rent burden and upfront move-in cost. See [`RuleEngine`].

mod rules;

pub use rules::RuleEngine;
