use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Splits a command line into tokens, keeping double-quoted spans together.
///
/// Fragments are separated by whitespace. A fragment starting with `"` opens
/// a quoted span which collects the following fragments, joined by single
/// spaces, up to and including the first fragment ending with `"`. The
/// enclosing quotes are stripped. A span that is never closed swallows the
/// rest of the line into one token.
///
/// ```
/// let tokens = split_tokens(r#"search "hello world" _ _ track"#);
/// assert_eq!(tokens, ["search", "hello world", "_", "_", "track"]);
/// ```
pub fn split_tokens(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut quoted: Option<String> = None;

    for fragment in command.split_whitespace() {
        match quoted.as_mut() {
            None => {
                let Some(rest) = fragment.strip_prefix('"') else {
                    tokens.push(fragment.to_string());
                    continue;
                };
                match rest.strip_suffix('"') {
                    Some(inner) => tokens.push(inner.to_string()),
                    None => quoted = Some(rest.to_string()),
                }
            }
            Some(current) => {
                if !current.is_empty() {
                    current.push(' ');
                }
                match fragment.strip_suffix('"') {
                    Some(last) => {
                        current.push_str(last);
                        tokens.extend(quoted.take());
                    }
                    None => current.push_str(fragment),
                }
            }
        }
    }

    // unterminated quote: keep what was collected
    tokens.extend(quoted);
    tokens
}

/// Starts a steady-ticking spinner with the given message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
