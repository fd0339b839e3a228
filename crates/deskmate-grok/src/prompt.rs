// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System prompt and summary prompt assembly.

use deskmate_core::{ConversationTurn, Role, UserContext};

/// The helpdesk persona sent as the system message on every request.
pub const HELPDESK_SYSTEM_PROMPT: &str = "You are an expert IT Helpdesk Assistant for a global corporation. Your role is to:

1. **Provide immediate technical support** for common IT issues including:
   - Network connectivity problems
   - Software installation and troubleshooting
   - Hardware issues (printers, monitors, keyboards, etc.)
   - Password resets and account access
   - Email and communication tools
   - VPN and security-related queries
   - Operating system issues (Windows, macOS, Linux)
   - Microsoft Office and productivity software
   - Mobile device support

2. **Respond professionally** with:
   - Clear, step-by-step instructions
   - Technical accuracy appropriate for business users
   - Friendly but professional tone
   - Empathy for user frustration
   - Confidence in your solutions

3. **Structure your responses** with:
   - Brief acknowledgment of the issue
   - Numbered step-by-step solutions
   - Additional tips or warnings if relevant
   - Offer to escalate if the solution doesn't work

4. **For complex issues**:
   - Provide initial troubleshooting steps
   - Suggest when to escalate to human support
   - Recommend creating a support ticket for tracking

5. **Security awareness**:
   - Never ask for passwords or sensitive information
   - Provide secure best practices
   - Warn about potential security risks

Always maintain a helpful, solution-oriented approach while ensuring users feel supported and confident in implementing your suggestions.";

/// Assemble the system message content for a completion request.
///
/// The language directive comes first so it outranks the persona, then the
/// persona, then a context line identifying the user. An empty directive
/// is omitted entirely.
pub fn system_prompt(language_directive: &str, user: &UserContext) -> String {
    let mut content = String::new();
    if !language_directive.is_empty() {
        content.push_str(language_directive);
        content.push_str("\n\n");
    }
    content.push_str(HELPDESK_SYSTEM_PROMPT);
    content.push_str(&format!(
        "\nUser Context: Username: {}, ID: {}, Email: {}",
        user.display_name, user.opaque_id, user.contact_email
    ));
    content
}

/// Build the prompt asking the model to summarize a chat into a ticket.
pub fn summary_prompt(history: &[ConversationTurn]) -> String {
    let chat_content = history
        .iter()
        .map(|turn| {
            let role = match turn.role {
                Role::User => "User",
                Role::Assistant => "Assistant",
            };
            format!("{role}: {}", turn.message)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Based on the following IT helpdesk chat conversation, create a comprehensive support ticket summary:\n\n{chat_content}\n\nPlease provide:\n1. **Issue Summary**: Brief description of the problem\n2. **Steps Attempted**: What solutions were tried during the chat\n3. **Current Status**: Whether the issue was resolved or needs escalation\n4. **Recommended Next Steps**: What should be done next\n5. **Priority Level**: Suggested priority (Low/Medium/High/Critical)\n6. **Category**: IT category (Network, Software, Hardware, Security, etc.)\n\nFormat as a professional support ticket summary."
    )
}

/// Deterministic ticket summary used when the gateway is unavailable.
pub fn fallback_summary(user: &UserContext) -> String {
    format!(
        "**Support Ticket Summary**\n\nUser {} ({}) engaged in a chat session seeking IT assistance. The conversation included multiple exchanges between the user and the AI assistant. This ticket requires human review to determine the appropriate resolution steps.\n\n**Priority**: Medium\n**Category**: General IT Support",
        user.display_name, user.opaque_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskmate_core::Language;

    fn test_user() -> UserContext {
        UserContext::new("maria", "EMP-1001", "maria@example.com")
    }

    #[test]
    fn directive_precedes_persona() {
        let prompt = system_prompt("IMPORTANTE: Responde SIEMPRE en español.", &test_user());
        assert!(prompt.starts_with("IMPORTANTE"));
        let directive_pos = prompt.find("IMPORTANTE").unwrap();
        let persona_pos = prompt.find("expert IT Helpdesk Assistant").unwrap();
        assert!(directive_pos < persona_pos);
    }

    #[test]
    fn empty_directive_is_omitted() {
        let prompt = system_prompt("", &test_user());
        assert!(prompt.starts_with("You are an expert IT Helpdesk Assistant"));
    }

    #[test]
    fn user_context_line_is_appended() {
        let prompt = system_prompt("", &test_user());
        assert!(prompt.ends_with(
            "User Context: Username: maria, ID: EMP-1001, Email: maria@example.com"
        ));
    }

    #[test]
    fn summary_prompt_transcribes_turns() {
        let history = vec![
            ConversationTurn::user("my vpn is broken", Language::En),
            ConversationTurn::assistant("Let's check the client version.", Language::En),
        ];
        let prompt = summary_prompt(&history);
        assert!(prompt.contains("User: my vpn is broken"));
        assert!(prompt.contains("Assistant: Let's check the client version."));
        assert!(prompt.contains("**Priority Level**"));
    }

    #[test]
    fn fallback_summary_names_user() {
        let summary = fallback_summary(&test_user());
        assert!(summary.contains("maria"));
        assert!(summary.contains("EMP-1001"));
        assert!(summary.contains("**Priority**: Medium"));
    }
}
