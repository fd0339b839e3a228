// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `deskmate chat` command implementation.
//!
//! Interactive helpdesk REPL with colored prompt and readline history.
//! Requires a login against the user store, then routes every message
//! through the query router; `/ticket` files a support ticket from the
//! session transcript.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use deskmate_auth::UserStore;
use deskmate_config::model::DeskmateConfig;
use deskmate_core::{ConversationTurn, DeskmateError, Language, TicketRequest, UserContext};
use deskmate_grok::GrokGateway;
use deskmate_intent::{IntentClassifier, JsonKeywordStore};
use deskmate_lang::{LanguageDetector, Localizer};
use deskmate_router::QueryRouter;
use deskmate_tickets::{FileTicketSink, create_or_fallback};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

const MAX_LOGIN_ATTEMPTS: usize = 3;

/// Runs the interactive helpdesk chat session.
pub async fn run_chat(config: DeskmateConfig) -> Result<(), DeskmateError> {
    let users = UserStore::load(Path::new(&config.data.users_path))?;

    let keyword_store = JsonKeywordStore::load(Path::new(&config.data.keyword_steps_path))?;
    let classifier = IntentClassifier::new().with_keyword_store(Arc::new(keyword_store));
    let gateway = GrokGateway::from_config(&config.grok)?;
    let router = QueryRouter::new(
        LanguageDetector::new(),
        Localizer::new(),
        classifier,
        gateway,
    );
    let ticket_sink = FileTicketSink::new(&config.data.tickets_path);
    let localizer = Localizer::new();

    let mut rl = DefaultEditor::new()
        .map_err(|e| DeskmateError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", config.agent.name.bold().green());

    let default_language = Language::from_code(&config.agent.default_language);
    let Some(mut user) = login(&mut rl, &users, &localizer, default_language)? else {
        return Ok(());
    };
    user.language = default_language;

    if !router.ai_available() {
        println!("{}", localizer.text("basic_mode", user.language).yellow());
    }
    println!("{}\n", router.welcome(&user, user.language));
    println!(
        "Type {} to file a ticket, {} to exit.\n",
        "/ticket".yellow(),
        "/quit".yellow()
    );

    let mut history: Vec<ConversationTurn> = Vec::new();
    let prompt = format!("{}> ", user.display_name.green());

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    println!("{}", localizer.text("thank_you", user.language));
                    break;
                }
                if trimmed.is_empty() {
                    println!("{}", localizer.text("enter_message", user.language));
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if trimmed == "/ticket" {
                    file_ticket(&router, &ticket_sink, &user, &history).await;
                    continue;
                }

                let response = router.route(trimmed, &user, &history).await;
                history.push(ConversationTurn::user(trimmed, response.language));
                history.push(ConversationTurn::assistant(
                    response.text.clone(),
                    response.language,
                ));
                // Language follows the latest message; the next welcome or
                // ticket confirmation speaks the user's current language.
                user.language = response.language;

                println!("\n{}\n{}\n", "assistant:".bold().blue(), response.text);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    Ok(())
}

/// Prompt for credentials against the user store.
///
/// Returns `None` when the user aborts (Ctrl+C/Ctrl+D) or exhausts the
/// attempt limit.
fn login(
    rl: &mut DefaultEditor,
    users: &UserStore,
    localizer: &Localizer,
    language: Language,
) -> Result<Option<UserContext>, DeskmateError> {
    println!("{}", localizer.text("login_required", language));

    for _ in 0..MAX_LOGIN_ATTEMPTS {
        let username = match rl.readline("username: ") {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => {
                return Err(DeskmateError::Internal(format!("readline failed: {e}")));
            }
        };
        let password = prompt_password()?;

        if let Some(record) = users.authenticate(&username, &password) {
            info!(username = %record.username, "login successful");
            return Ok(Some(UserContext::new(
                record.username.clone(),
                record.id.clone(),
                record.email.clone(),
            )));
        }
        println!("{}", "invalid username or password".red());
    }

    println!("too many failed attempts");
    Ok(None)
}

/// Read the password without echoing it to the terminal.
///
/// Requires an interactive TTY; piped stdin is rejected.
fn prompt_password() -> Result<String, DeskmateError> {
    if !std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        return Err(DeskmateError::Internal(
            "password prompt requires an interactive terminal".to_string(),
        ));
    }
    eprint!("password: ");
    rpassword::read_password()
        .map_err(|e| DeskmateError::Internal(format!("failed to read password: {e}")))
}

/// Summarize the session and file a ticket, printing the assigned id.
async fn file_ticket(
    router: &QueryRouter,
    sink: &FileTicketSink,
    user: &UserContext,
    history: &[ConversationTurn],
) {
    let summary = router.ticket_summary(history, user).await;
    let request = TicketRequest {
        username: user.display_name.clone(),
        opaque_id: user.opaque_id.clone(),
        email: user.contact_email.clone(),
        summary,
    };
    let ticket_id = create_or_fallback(sink, &request).await;
    println!(
        "{} {}",
        "ticket created:".bold().green(),
        ticket_id.bold()
    );
    println!("You will receive an email confirmation shortly.\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_prompt_refuses_without_terminal() {
        // In CI/test, stdin is not a terminal, so the masked prompt refuses
        // rather than reading an echoed secret from a pipe.
        let result = prompt_password();
        assert!(matches!(result, Err(DeskmateError::Internal(_))));
    }
}
