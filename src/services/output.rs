use crate::domain::models::{ErrorBody, ErrorOut, JsonOut};
use serde::Serialize;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Render a fatal error. JSON mode keeps the envelope shape so callers can
/// parse failures the same way as successes; text mode goes to stderr.
pub fn print_error(json: bool, code: &str, message: &str) {
    if json {
        let out = ErrorOut {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(rendered) => println!("{rendered}"),
            Err(_) => println!("{{\"ok\":false}}"),
        }
    } else {
        eprintln!("error: {message}");
    }
}

/// Truncate long field values for terse report lines.
pub fn preview(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
