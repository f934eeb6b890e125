//! Configuration for the housing agent
//!
//! Policy numbers (defaults in [`constants`], YAML overrides through
//! [`PolicyConfig`]) and the FAQ answer catalog. This crate owns the only
//! fallible surface in the workspace: reading and parsing config files.

pub mod constants;

mod catalog;
mod policy;

pub use catalog::FaqCatalog;
pub use policy::{ConfigError, FeeBracket, PolicyConfig};
