//! Shared types for the support responder.

use std::fmt;

use serde::Deserialize;

// ── Conversation ────────────────────────────────────────────────────

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label used in transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One prior message in the support conversation.
///
/// Only ever rendered into the context transcript; never parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversationTurn {
    #[serde(rename = "type")]
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ── Intent ──────────────────────────────────────────────────────────

/// Category of a support message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    GettingStarted,
    AgentError,
    Billing,
    AccountAccess,
    Fallback,
}

impl Intent {
    /// Every intent, in rule-evaluation order with `Fallback` last.
    pub const ALL: [Intent; 5] = [
        Intent::GettingStarted,
        Intent::AgentError,
        Intent::Billing,
        Intent::AccountAccess,
        Intent::Fallback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::GettingStarted => "getting_started",
            Intent::AgentError => "agent_error",
            Intent::Billing => "billing",
            Intent::AccountAccess => "account_access",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Suggested actions ───────────────────────────────────────────────

/// Contact medium offered as a follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    LiveChat,
}

impl ContactChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactChannel::Email => "email",
            ContactChannel::LiveChat => "chat",
        }
    }
}

/// Where a suggested action leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionTarget {
    /// Navigate to a site path.
    Link(String),
    /// Open a contact channel.
    Contact(ContactChannel),
}

impl ActionTarget {
    /// Wire name of the action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionTarget::Link(_) => "link",
            ActionTarget::Contact(_) => "contact",
        }
    }

    /// Wire value: the path for links, the medium for contacts.
    pub fn value(&self) -> &str {
        match self {
            ActionTarget::Link(path) => path,
            ActionTarget::Contact(channel) => channel.as_str(),
        }
    }
}

/// A follow-up offered alongside a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedAction {
    pub label: String,
    pub target: ActionTarget,
}

impl SuggestedAction {
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: ActionTarget::Link(path.into()),
        }
    }

    pub fn contact(label: impl Into<String>, channel: ContactChannel) -> Self {
        Self {
            label: label.into(),
            target: ActionTarget::Contact(channel),
        }
    }
}

// ── Response ────────────────────────────────────────────────────────

/// Everything returned to the caller for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub content: String,
    pub actions: Vec<SuggestedAction>,
}

/// Responder result: the envelope plus the intent that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportReply {
    pub intent: Intent,
    pub envelope: ResponseEnvelope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_uses_type_field_on_the_wire() {
        let turn: ConversationTurn =
            serde_json::from_str(r#"{"type": "assistant", "content": "Hi!"}"#).unwrap();
        assert_eq!(turn, ConversationTurn::assistant("Hi!"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<ConversationTurn, _> =
            serde_json::from_str(r#"{"type": "system", "content": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn action_target_wire_parts() {
        let link = SuggestedAction::link("Reset Password", "/login");
        assert_eq!(link.target.kind(), "link");
        assert_eq!(link.target.value(), "/login");

        let contact = SuggestedAction::contact("Email Support", ContactChannel::Email);
        assert_eq!(contact.target.kind(), "contact");
        assert_eq!(contact.target.value(), "email");
    }

    #[test]
    fn intent_names_are_snake_case() {
        let names: Vec<String> = Intent::ALL.iter().map(|i| i.to_string()).collect();
        assert_eq!(
            names,
            vec!["getting_started", "agent_error", "billing", "account_access", "fallback"]
        );
    }
}
