//! Support chat intent responder.
//!
//! Inbound support messages flow through:
//! 1. `IntentRules::classify()` — ordered keyword rules, first match wins
//! 2. `KnowledgeBase::entry()` — canned answer and follow-up actions
//! 3. `routes` — JSON wire format for the chat widget

pub mod context;
pub mod knowledge;
pub mod responder;
pub mod routes;
pub mod rules;
pub mod server;
pub mod types;

pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use responder::SupportResponder;
pub use rules::{IntentRules, Predicate};
pub use types::{
    ActionTarget, ContactChannel, ConversationTurn, Intent, ResponseEnvelope, Role,
    SuggestedAction, SupportReply,
};
