//! The support intent responder.
//!
//! Classifies a message with [`IntentRules`] and answers from the
//! [`KnowledgeBase`]. Stateless and deterministic: the same message always
//! produces the same envelope.
//!
//! Conversation history is accepted but does not influence classification.
//! It only feeds the context string (see [`build_context`]).

use tracing::debug;

use super::context::build_context;
use super::knowledge::KnowledgeBase;
use super::rules::IntentRules;
use super::types::{ConversationTurn, ResponseEnvelope, SupportReply};
use crate::config::ResponderConfig;

pub struct SupportResponder {
    rules: IntentRules,
    knowledge: &'static KnowledgeBase,
    config: ResponderConfig,
}

impl Default for SupportResponder {
    fn default() -> Self {
        Self::new(ResponderConfig::default())
    }
}

impl SupportResponder {
    /// Responder with the default rule table and global knowledge base.
    pub fn new(config: ResponderConfig) -> Self {
        Self::with_rules(IntentRules::default_rules(), config)
    }

    pub fn with_rules(rules: IntentRules, config: ResponderConfig) -> Self {
        Self {
            rules,
            knowledge: KnowledgeBase::global(),
            config,
        }
    }

    /// Classify `message` and assemble the canned answer.
    pub fn respond(&self, message: &str, history: &[ConversationTurn]) -> SupportReply {
        let context = build_context(
            self.knowledge,
            history,
            message,
            self.config.max_history_turns,
        );
        debug!(
            context_len = context.len(),
            history_turns = history.len(),
            "Built support context"
        );

        let intent = self.rules.classify(message);
        let entry = self.knowledge.entry(intent);

        SupportReply {
            intent,
            envelope: ResponseEnvelope {
                content: entry.template.to_string(),
                actions: entry.actions.clone(),
            },
        }
    }

    /// Envelope-only form of [`respond`](Self::respond).
    pub fn classify_and_respond(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> ResponseEnvelope {
        self.respond(message, history).envelope
    }
}
