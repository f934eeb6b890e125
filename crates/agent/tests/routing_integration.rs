//! Integration tests for utterance routing (text -> lane -> reply)
//!
//! These tests drive the full agent: field extraction, advisory rules,
//! FAQ matching, and lane selection, using the built-in catalog and the
//! default policy unless a test supplies its own.

use housing_agent_agent::{AgentReply, HousingAgent};
use housing_agent_config::{FaqCatalog, PolicyConfig};

/// Test that degenerate input asks for clarification
#[test]
fn test_clarification_for_low_info() {
    let agent = HousingAgent::new();

    for utterance in ["", "   ", "?", "!!", "ㅋ"] {
        let reply = agent.handle(utterance);
        assert!(
            matches!(reply, AgentReply::Clarify),
            "expected clarify for {:?}",
            utterance
        );
        assert!(!reply.message().is_empty());
    }
}

/// Test the affordability path from raw text to rendered warning
#[test]
fn test_affordability_advisory_end_to_end() {
    let agent = HousingAgent::new();
    let reply = agent.handle("월소득 300만이고 월세 100만이에요");

    match &reply {
        AgentReply::Advisory {
            inputs,
            facts,
            warnings,
        } => {
            assert_eq!(inputs.income_monthly, Some(3_000_000));
            assert_eq!(inputs.monthly_rent, Some(1_000_000));
            assert!(facts[0].contains("33.3%"));
            assert_eq!(warnings.len(), 1);
        }
        other => panic!("expected advisory lane, got {:?}", other),
    }

    let message = reply.message();
    assert!(message.contains("33.3%"));
    assert!(message.contains("30%"));
}

/// Test the upfront-cost path: converted price, fee bracket, and total
#[test]
fn test_upfront_cost_advisory_end_to_end() {
    let agent = HousingAgent::new();
    let reply = agent.handle("월세 50만 보증금 1억 현금 100만 있어요");

    match reply {
        AgentReply::Advisory {
            inputs,
            facts,
            warnings,
        } => {
            assert_eq!(inputs.monthly_rent, Some(500_000));
            assert_eq!(inputs.deposit, Some(100_000_000));
            assert_eq!(inputs.cash_on_hand, Some(1_000_000));
            // 100M + 50 x 100 = 150M -> 0.5% -> 750,000 fee
            // 750,000 + 500,000 + 400,000 = 1,650,000 upfront
            assert!(facts[0].contains("1,650,000"));
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("1,650,000"));
        }
        other => panic!("expected advisory lane, got {:?}", other),
    }
}

/// Test that a catalog question gets its canned answer
#[test]
fn test_faq_answer_for_catalog_question() {
    let agent = HousingAgent::new();
    let reply = agent.handle("보금자리론이란?");

    match &reply {
        AgentReply::Faq {
            question,
            answer,
            score,
        } => {
            assert_eq!(question, "보금자리론이란?");
            assert_eq!(*score, 1.0);
            assert_eq!(&reply.message(), answer);
        }
        other => panic!("expected faq lane, got {:?}", other),
    }
}

/// Test that an analytical question without numbers falls through to
/// the domain-flavored fallback when no catalog entry matches
#[test]
fn test_analytical_without_numbers_falls_through() {
    let agent = HousingAgent::new();
    let reply = agent.handle("30년 상환 어떻게 돼요?");

    assert!(matches!(
        reply,
        AgentReply::Fallback {
            domain_related: true
        }
    ));
}

/// Test that off-domain chatter gets the general fallback
#[test]
fn test_off_domain_fallback() {
    let agent = HousingAgent::new();
    let reply = agent.handle("저녁 메뉴 추천해 줘");

    match reply {
        AgentReply::Fallback { domain_related } => assert!(!domain_related),
        other => panic!("expected fallback lane, got {:?}", other),
    }
}

/// Test that a supplied policy and catalog replace the built-ins
#[test]
fn test_custom_policy_and_catalog() {
    let policy = PolicyConfig {
        moving_cost_won: 0,
        faq_match_threshold: 0.5,
        ..PolicyConfig::default()
    };
    let catalog = FaqCatalog {
        items: vec![housing_agent_core::FaqItem {
            question: "중개보수 계산 방법".to_string(),
            answer: "환산보증금에 구간별 상한요율을 곱해 계산합니다.".to_string(),
        }],
    };
    let agent = HousingAgent::with_config(policy, catalog);

    // Without the 400,000 moving allowance the upfront total drops
    let reply = agent.handle("월세 50만 보증금 1억 현금 100만");
    match reply {
        AgentReply::Advisory { facts, .. } => assert!(facts[0].contains("1,250,000")),
        other => panic!("expected advisory lane, got {:?}", other),
    }

    // A partial match clears the lowered threshold but not the default one
    let reply = agent.handle("중개보수 계산");
    match reply {
        AgentReply::Faq { score, .. } => {
            assert!(score >= 0.5 && score < 0.8);
        }
        other => panic!("expected faq lane, got {:?}", other),
    }
}

/// Test that routing the same utterance twice gives identical replies
#[test]
fn test_routing_is_idempotent() {
    let agent = HousingAgent::new();

    for utterance in [
        "월세 50만 보증금 1억 현금 100만",
        "보금자리론이란?",
        "30년 상환 어떻게 돼요?",
        "?",
    ] {
        let first = serde_json::to_string(&agent.handle(utterance)).unwrap();
        let second = serde_json::to_string(&agent.handle(utterance)).unwrap();
        assert_eq!(first, second, "reply drifted for {:?}", utterance);
    }
}

/// Test the JSON shape the chat layer consumes
#[test]
fn test_reply_json_shape() {
    let agent = HousingAgent::new();

    let json = serde_json::to_value(agent.handle("보금자리론이란?")).unwrap();
    assert_eq!(json["kind"], "faq");
    assert!(json["answer"].is_string());

    let json = serde_json::to_value(agent.handle("월세 100만 월소득 300만")).unwrap();
    assert_eq!(json["kind"], "advisory");
    assert_eq!(json["inputs"]["monthly_rent"], 1_000_000);
    assert!(json["inputs"]["deposit"].is_null());
}
