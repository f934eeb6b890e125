//! Utterance Routing
//!
//! Single entry point of the workspace: [`HousingAgent::handle`] takes one
//! raw utterance and returns the reply lane the chat layer should render.
//! Lane order is fixed: clarification for low-info text, advisory when the
//! rules produced anything, FAQ when a catalog entry clears the threshold,
//! fallback otherwise. Every step is pure and synchronous; the agent holds
//! only immutable configuration and can be shared across requests.

use housing_agent_advisor::RuleEngine;
use housing_agent_config::{FaqCatalog, PolicyConfig};
use housing_agent_core::MoneyInputs;
use housing_agent_faq::FaqMatcher;
use housing_agent_text_processing::FieldExtractor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::topic;

const CLARIFY_PROMPT: &str = "조금 더 구체적으로 말씀해 주시겠어요? 보증금이나 월세 금액을 알려주시면 바로 계산해 드릴게요.";

const DOMAIN_FALLBACK_PROMPT: &str = "딱 맞는 답을 찾지 못했어요. 보증금, 월세, 월 소득 같은 숫자를 함께 알려주시면 비용과 부담을 계산해 드릴게요.";

const GENERAL_FALLBACK_PROMPT: &str = "주택 금융과 전월세 비용 상담을 도와드리고 있어요. 예를 들어 \"월세 50만 보증금 2억\"처럼 말씀해 보세요.";

/// Reply lane chosen for an utterance
///
/// Carries the structured payload of the lane; [`AgentReply::message`]
/// renders the Korean text a chat layer shows verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentReply {
    /// Too little content to act on; ask for specifics
    Clarify,
    /// Rule engine produced facts or warnings from extracted amounts
    Advisory {
        inputs: MoneyInputs,
        facts: Vec<String>,
        warnings: Vec<String>,
    },
    /// A catalog question matched above the similarity threshold
    Faq {
        question: String,
        answer: String,
        score: f64,
    },
    /// No lane matched; `domain_related` flavors the prompt
    Fallback { domain_related: bool },
}

impl AgentReply {
    /// Korean reply text for this lane
    pub fn message(&self) -> String {
        match self {
            AgentReply::Clarify => CLARIFY_PROMPT.to_string(),
            AgentReply::Advisory {
                facts, warnings, ..
            } => facts
                .iter()
                .chain(warnings.iter())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            AgentReply::Faq { answer, .. } => answer.clone(),
            AgentReply::Fallback {
                domain_related: true,
            } => DOMAIN_FALLBACK_PROMPT.to_string(),
            AgentReply::Fallback {
                domain_related: false,
            } => GENERAL_FALLBACK_PROMPT.to_string(),
        }
    }
}

/// Deterministic housing-finance agent core
pub struct HousingAgent {
    extractor: FieldExtractor,
    rules: RuleEngine,
    matcher: FaqMatcher,
    catalog: FaqCatalog,
}

impl Default for HousingAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl HousingAgent {
    /// Agent with built-in policy numbers and the embedded FAQ catalog
    pub fn new() -> Self {
        Self::with_config(PolicyConfig::default(), FaqCatalog::builtin().clone())
    }

    /// Agent with deployment-supplied policy and catalog
    pub fn with_config(policy: PolicyConfig, catalog: FaqCatalog) -> Self {
        let matcher = FaqMatcher::with_threshold(policy.faq_match_threshold);
        Self {
            extractor: FieldExtractor::new(),
            rules: RuleEngine::with_policy(policy),
            matcher,
            catalog,
        }
    }

    /// Route one utterance to its reply lane.
    ///
    /// An analytical utterance whose numbers produce no rule output falls
    /// through to FAQ matching, and an unmatched FAQ query falls through
    /// to the fallback prompt.
    pub fn handle(&self, utterance: &str) -> AgentReply {
        if topic::is_low_info(utterance) {
            debug!("low-info utterance, asking to clarify");
            return AgentReply::Clarify;
        }

        let inputs = self.extractor.extract(utterance);
        let result = self.rules.evaluate(&inputs);
        if !result.is_empty() {
            debug!(
                facts = result.facts.len(),
                warnings = result.warnings.len(),
                "advisory lane"
            );
            return AgentReply::Advisory {
                inputs,
                facts: result.facts,
                warnings: result.warnings,
            };
        }

        if let Some(hit) = self.matcher.best_match(utterance, self.catalog.items()) {
            debug!(index = hit.index, score = hit.score, "faq lane");
            return AgentReply::Faq {
                question: hit.item.question,
                answer: hit.item.answer,
                score: hit.score,
            };
        }

        let domain_related =
            topic::is_real_estate_query(utterance) || topic::is_analytical_topic(utterance);
        debug!(domain_related, "fallback lane");
        AgentReply::Fallback { domain_related }
    }
}
