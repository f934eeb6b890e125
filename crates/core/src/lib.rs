//! Core types for the housing-finance agent
//!
//! The shared data model (extracted money fields, rule findings, FAQ
//! entries) and the pure calculations the advisory rules are built on.
//! Everything here is synchronous and never fails: absence of data is an
//! absent field, not an error.

pub mod financial;

mod advice;
mod faq;
mod money;

pub use advice::RuleResult;
pub use faq::{FaqItem, FaqMatch};
pub use money::{format_won, MoneyInputs};
