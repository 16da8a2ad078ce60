use serde::Serialize;

use super::preferences::CarPreferences;

pub const SYSTEM_PROMPT: &str =
    "You are a practical UK car advisor. Be concise, specific, and not salesy.";

const TASK_LINES: [&str; 5] = [
    "Task:",
    "Recommend 3 cars that suit the user in the UK market.",
    "For each: give a 1-line reason + 3 short bullets (pros/cons or key points).",
    "Then ask 1 short follow-up question to improve the match.",
    "Keep it concise and practical.",
];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system", content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user", content: content.into() }
    }
}

/// Render the user turn. Field values are embedded verbatim after coercion.
pub fn build_user_prompt(prefs: &CarPreferences) -> String {
    let mut lines = vec![
        format!("Budget: {}", prefs.budget_or_placeholder()),
        format!("Preferences: {}", prefs.picks_or_placeholder()),
        format!("Notes: {}", prefs.notes_or_placeholder()),
        String::new(),
    ];
    lines.extend(TASK_LINES.iter().map(|l| l.to_string()));
    lines.join("\n")
}

pub fn build_messages(prefs: &CarPreferences) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(build_user_prompt(prefs)),
    ]
}
