//! `kheti-guru classify` and `kheti-guru ask`.

use std::path::Path;

use kheti_guru::assistant::{MatcherProfile, Reply, ReplyAction};
use kheti_guru::config::Settings;

use super::CliError;

/// What: Print the topic id a question is routed to.
///
/// Inputs:
/// - `settings`: Loaded settings (matcher file and default profile).
/// - `text`: Question text.
/// - `profile`: Profile override from the command line.
pub fn handle_classify(settings: &Settings, text: &str, profile: Option<MatcherProfile>) {
    let topic = settings.matcher(profile).classify(text);
    tracing::info!(topic = %topic, "Classify requested from CLI");
    println!("{}", topic.id());
}

/// What: Answer a question in the active language.
///
/// Inputs:
/// - `settings`: Loaded settings.
/// - `config_dir`: Directory holding the default preference store.
/// - `text`: Question text.
/// - `profile`: Profile override from the command line.
/// - `json`: Print the whole reply as JSON instead of text.
///
/// # Errors
/// - `CliError::Catalog` if the catalog cannot be built.
/// - `CliError::Output` if JSON serialization fails.
pub fn handle_ask(
    settings: &Settings,
    config_dir: &Path,
    text: &str,
    profile: Option<MatcherProfile>,
    json: bool,
) -> Result<(), CliError> {
    let loc = settings.localizer(config_dir)?;
    let assistant = settings.assistant(profile);
    let reply = assistant.respond(&loc, text);
    tracing::info!(topic = %reply.topic, language = %loc.active_language(), "Ask requested from CLI");
    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!("{}", render_reply(&reply));
    }
    Ok(())
}

/// Plain-text rendering: message, then follow-up, then contact links.
fn render_reply(reply: &Reply) -> String {
    let mut lines = vec![reply.message.clone()];
    if let Some(follow_up) = &reply.follow_up {
        lines.push(follow_up.clone());
    }
    match &reply.action {
        Some(ReplyAction::OfferExpert { call_uri, chat_uri }) => {
            lines.push(format!("  call: {call_uri}"));
            lines.push(format!("  chat: {chat_uri}"));
        }
        Some(ReplyAction::OpenCamera) => lines.push("  [camera]".to_string()),
        None => {}
    }
    lines.join("\n")
}
