//! Housing-finance chat agent core
//!
//! The deterministic NLU and rule layer of a Korean housing-finance chat
//! assistant:
//! - topic predicates that pick the handling lane
//! - money-field extraction feeding the advisory rules
//! - bigram FAQ matching over the built-in catalog
//!
//! [`HousingAgent::handle`] ties the lanes together; the HTTP chat layer
//! that calls it lives outside this workspace.

pub mod topic;

mod router;

pub use router::{AgentReply, HousingAgent};
