//! Prompt templates for lead-directed selection

/// Templates for the decision prompt sent to the speaker decider
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the speaker decider
    pub fn lead_selection_system() -> &'static str {
        r#"You are coordinating a panel of specialists answering a user request.
Given the conversation so far, decide which participants should speak and in
what order. Reply with a comma-separated list of participant names and
nothing else. Only use names from the participant list."#
    }

    /// User prompt for the speaker decider
    pub fn lead_selection_prompt(participants: &[String], conversation: &str) -> String {
        let mut prompt = format!(
            r#"Participants:
{}

Conversation so far:
{}"#,
            participants.join(", "),
            conversation
        );

        prompt.push_str(
            r#"
Which participants should speak next, and in what order? Reply with a
comma-separated list of participant names."#,
        );

        prompt
    }
}
