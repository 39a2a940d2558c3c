//! Terminal rendering for surprise envelopes.

use serde_json::Value;

use crate::client::SurpriseResponse;

fn field<'a>(resp: &'a SurpriseResponse, key: &str) -> &'a str {
    resp.content.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Render an envelope for display. Daily surprises render like their
/// underlying kind with a header line.
pub fn render(resp: &SurpriseResponse) -> String {
    let (daily, kind) = match resp.kind.strip_prefix("daily_") {
        Some(kind) => (true, kind),
        None => (false, resp.kind.as_str()),
    };
    let emoji = field(resp, "emoji");

    let body = match kind {
        "quote" => format!(
            "{emoji} \"{}\"\n   — {}",
            field(resp, "quote"),
            field(resp, "author")
        ),
        "joke" => format!(
            "{emoji} {}\n   {}",
            field(resp, "setup"),
            field(resp, "punchline")
        ),
        "fact" => format!("{emoji} {}", field(resp, "fact")),
        "ascii_art" => format!(
            "{emoji} {}\n{}",
            field(resp, "name"),
            field(resp, "art").trim_end()
        ),
        "challenge" => format!(
            "{emoji} [{}] {}\n   hint: {}",
            field(resp, "difficulty"),
            field(resp, "challenge"),
            field(resp, "hint")
        ),
        "motivation" | "celebration" => {
            let mut out = format!("{emoji} {}", field(resp, "message"));
            if resp.content.get("confetti").and_then(Value::as_bool) == Some(true) {
                out.push_str("\n   🎊 🎉 🎊 🎉 🎊");
            }
            out
        }
        _ => serde_json::to_string_pretty(&resp.content)
            .unwrap_or_else(|_| format!("{:?}", resp.content)),
    };

    if daily {
        format!("daily inspiration\n{body}")
    } else {
        body
    }
}
