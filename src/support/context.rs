//! Context string assembly.
//!
//! Builds the text blob a model-backed responder would be prompted with. The
//! keyword classifier never reads it; it is only logged.

use super::knowledge::KnowledgeBase;
use super::types::ConversationTurn;

/// Render the knowledge preamble, the most recent `max_turns` history turns,
/// and the new message.
pub fn build_context(
    knowledge: &KnowledgeBase,
    history: &[ConversationTurn],
    message: &str,
    max_turns: usize,
) -> String {
    let mut context = String::from(knowledge.preamble());
    context.push_str("\n\n");

    let start = history.len().saturating_sub(max_turns);
    let recent = &history[start..];
    if !recent.is_empty() {
        context.push_str("Recent conversation:\n");
        for turn in recent {
            context.push_str(turn.role.label());
            context.push_str(": ");
            context.push_str(&turn.content);
            context.push('\n');
        }
        context.push('\n');
    }

    context.push_str("User: ");
    context.push_str(message);
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_history_section_when_empty() {
        let ctx = build_context(KnowledgeBase::global(), &[], "hello", 10);
        assert!(!ctx.contains("Recent conversation"));
        assert!(ctx.ends_with("User: hello"));
        assert!(ctx.starts_with(KnowledgeBase::global().preamble()));
    }

    #[test]
    fn history_rendered_in_order() {
        let history = vec![
            ConversationTurn::user("my agent broke"),
            ConversationTurn::assistant("Which agent?"),
        ];
        let ctx = build_context(KnowledgeBase::global(), &history, "the email one", 10);
        let section = ctx.split("Recent conversation:\n").nth(1).unwrap();
        assert!(section.starts_with(
            "User: my agent broke\nAssistant: Which agent?\n\nUser: the email one"
        ));
    }

    #[test]
    fn history_capped_to_most_recent_turns() {
        let history: Vec<ConversationTurn> = (0..5)
            .map(|i| ConversationTurn::user(format!("turn {i}")))
            .collect();
        let ctx = build_context(KnowledgeBase::global(), &history, "now", 2);
        assert!(!ctx.contains("turn 2"));
        assert!(ctx.contains("turn 3"));
        assert!(ctx.contains("turn 4"));
    }

    #[test]
    fn zero_cap_drops_history() {
        let history = vec![ConversationTurn::user("earlier")];
        let ctx = build_context(KnowledgeBase::global(), &history, "now", 0);
        assert!(!ctx.contains("Recent conversation"));
    }
}
