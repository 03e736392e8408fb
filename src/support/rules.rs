//! Ordered keyword rules that pick the intent of a support message.
//!
//! Rules are evaluated top to bottom against the lower-cased message and the
//! first match wins. Order is part of the behavior: a message that mentions
//! both getting started and a password is a getting-started question because
//! that rule comes first. Messages matching nothing fall back to
//! [`Intent::Fallback`].
//!
//! Default order:
//! 1. getting started / how to start / begin → `GettingStarted`
//! 2. "agent" plus an error phrase → `AgentError`
//! 3. payment / billing / credit / subscription → `Billing`
//! 4. login / password / account / access → `AccountAccess`

use tracing::debug;

use super::types::Intent;

/// Boolean keyword test over a lower-cased message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// True when the message contains any of the keywords.
    Any(&'static [&'static str]),
    /// True when every inner predicate is true.
    All(Vec<Predicate>),
}

impl Predicate {
    /// `haystack` must already be lower-cased.
    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Predicate::Any(keywords) => keywords.iter().any(|k| haystack.contains(k)),
            Predicate::All(parts) => parts.iter().all(|p| p.matches(haystack)),
        }
    }
}

/// A single `(predicate, intent)` pair.
#[derive(Debug, Clone)]
pub struct IntentRule {
    /// Intent assigned when the predicate matches.
    pub intent: Intent,
    /// Keyword test over the lower-cased message.
    pub predicate: Predicate,
}

const GETTING_STARTED: &[&str] = &["getting started", "get started", "how to start", "begin"];
const AGENT: &[&str] = &["agent"];
const AGENT_FAILURE: &[&str] = &[
    "not working",
    "error",
    "problem",
    "timing out",
    "timeout",
    "failing",
];
const BILLING: &[&str] = &["payment", "billing", "credit", "subscription"];
const ACCOUNT_ACCESS: &[&str] = &["login", "password", "account", "access"];

/// Ordered rule table.
#[derive(Debug, Clone)]
pub struct IntentRules {
    rules: Vec<IntentRule>,
}

impl Default for IntentRules {
    fn default() -> Self {
        Self::default_rules()
    }
}

impl IntentRules {
    /// The production rule table.
    pub fn default_rules() -> Self {
        Self::empty()
            .with_rule(Intent::GettingStarted, Predicate::Any(GETTING_STARTED))
            .with_rule(
                Intent::AgentError,
                Predicate::All(vec![Predicate::Any(AGENT), Predicate::Any(AGENT_FAILURE)]),
            )
            .with_rule(Intent::Billing, Predicate::Any(BILLING))
            .with_rule(Intent::AccountAccess, Predicate::Any(ACCOUNT_ACCESS))
    }

    /// A table with no rules; everything classifies as fallback.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after all existing ones.
    pub fn with_rule(mut self, intent: Intent, predicate: Predicate) -> Self {
        self.rules.push(IntentRule { intent, predicate });
        self
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classify a raw message. Never fails.
    pub fn classify(&self, message: &str) -> Intent {
        let normalized = message.to_lowercase();

        match self.rules.iter().find(|r| r.predicate.matches(&normalized)) {
            Some(rule) => {
                debug!(intent = %rule.intent, "Message matched intent rule");
                rule.intent
            }
            None => {
                debug!("No intent rule matched, using fallback");
                Intent::Fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(message: &str) -> Intent {
        IntentRules::default_rules().classify(message)
    }

    #[test]
    fn getting_started_phrases() {
        assert_eq!(classify("Getting started with agents"), Intent::GettingStarted);
        assert_eq!(classify("how to start?"), Intent::GettingStarted);
        assert_eq!(classify("Where do I BEGIN"), Intent::GettingStarted);
        assert_eq!(classify("help me get started"), Intent::GettingStarted);
    }

    #[test]
    fn agent_error_needs_agent_and_failure() {
        assert_eq!(classify("My agent is not working"), Intent::AgentError);
        assert_eq!(classify("Agent threw an ERROR"), Intent::AgentError);
        assert_eq!(classify("problem with my agent"), Intent::AgentError);
        assert_eq!(
            classify("My ticket-resolver agent keeps timing out"),
            Intent::AgentError
        );
        // failure phrase without "agent"
        assert_eq!(classify("I see an error on the page"), Intent::Fallback);
        // "agent" without failure phrase
        assert_eq!(classify("which agent should I pick"), Intent::Fallback);
    }

    #[test]
    fn billing_keywords() {
        for msg in [
            "Payment declined",
            "question about billing",
            "How do credits work",
            "cancel my subscription",
        ] {
            assert_eq!(classify(msg), Intent::Billing, "{msg}");
        }
    }

    #[test]
    fn account_access_keywords() {
        for msg in [
            "login page is blank",
            "I can't log in, forgot my password",
            "delete my account",
            "no access to dashboard",
        ] {
            assert_eq!(classify(msg), Intent::AccountAccess, "{msg}");
        }
    }

    #[test]
    fn unmatched_is_fallback() {
        assert_eq!(classify("What's the weather like today?"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            classify("how do I get started, I forgot my password"),
            Intent::GettingStarted
        );
        assert_eq!(
            classify("agent error after my payment went through"),
            Intent::AgentError
        );
        assert_eq!(
            classify("I need access to my billing history"),
            Intent::Billing
        );
    }

    #[test]
    fn empty_rules_fall_back() {
        let rules = IntentRules::empty();
        assert_eq!(rules.classify("getting started"), Intent::Fallback);
    }

    #[test]
    fn custom_rule_order_is_respected() {
        let rules = IntentRules::empty()
            .with_rule(Intent::AccountAccess, Predicate::Any(&["password"]))
            .with_rule(Intent::GettingStarted, Predicate::Any(&["get started"]));
        assert_eq!(
            rules.classify("how do I get started, I forgot my password"),
            Intent::AccountAccess
        );
    }

    #[test]
    fn default_table_order() {
        let order: Vec<Intent> = IntentRules::default_rules()
            .rules()
            .iter()
            .map(|r| r.intent)
            .collect();
        assert_eq!(
            order,
            vec![
                Intent::GettingStarted,
                Intent::AgentError,
                Intent::Billing,
                Intent::AccountAccess
            ]
        );
    }
}
