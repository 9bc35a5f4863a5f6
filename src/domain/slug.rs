use regex::Regex;
use std::sync::LazyLock;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Turns arbitrary input into a URL-safe publish key: lowercase, every
/// character outside `[a-z0-9-]` mapped to `-`, hyphen runs collapsed,
/// leading/trailing hyphens trimmed. Idempotent; empty in, empty out.
pub fn normalize_slug(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mapped: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect();

    let mut out = String::with_capacity(mapped.len());
    let mut prev_hyphen = false;
    for c in mapped.chars() {
        if c == '-' {
            if !prev_hyphen {
                out.push('-');
            }
            prev_hyphen = true;
        } else {
            out.push(c);
            prev_hyphen = false;
        }
    }

    out.trim_matches('-').to_string()
}

pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}
