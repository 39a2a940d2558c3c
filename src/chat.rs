//! Line handling for the interactive `chat` REPL.
//!
//! Lines starting with `/` are commands: `/help`, `/hint`, or the name of a
//! surprise endpoint (`/joke`, `/daily`, ...). Anything else is checked
//! against the easter egg table.

use anyhow::Result;

use crate::client::Endpoint;
use crate::eggs;
use crate::render::render;
use crate::source::SurpriseSource;

/// What the REPL should do with a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank input, prompt again.
    Empty,
    Quit,
    /// Print this and keep going.
    Say(String),
}

pub fn help_text() -> String {
    let mut out = String::from("commands:\n  /help    show this help\n  /hint    get a nudge\n");
    for endpoint in Endpoint::ALL {
        out.push_str(&format!("  /{:<8} fetch a surprise\n", endpoint.path()));
    }
    out.push_str("  quit     leave\n");
    out
}

/// Handle one line of input.
pub async fn respond(line: &str, source: &dyn SurpriseSource) -> Result<Reply> {
    let input = line.trim();

    if input.is_empty() {
        return Ok(Reply::Empty);
    }
    if input == "quit" || input == "exit" {
        return Ok(Reply::Quit);
    }

    if let Some(command) = input.strip_prefix('/') {
        return match command {
            "help" | "?" => Ok(Reply::Say(help_text())),
            "hint" => Ok(Reply::Say(eggs::random_hint().to_string())),
            other => match other.parse::<Endpoint>() {
                Ok(endpoint) => {
                    let surprise = source.fetch(endpoint).await?;
                    Ok(Reply::Say(render(&surprise)))
                }
                Err(_) => Ok(Reply::Say(format!(
                    "unknown command: {input}\ntype /help for available commands"
                ))),
            },
        };
    }

    match eggs::check_easter_egg(input) {
        Some(egg) => Ok(Reply::Say(format!(
            "{}\n{}",
            egg.response,
            eggs::achievement_message()
        ))),
        None => Ok(Reply::Say(format!("you said: {input}"))),
    }
}
