use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Email pattern: matches standard email addresses
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL_REGEX
}

/// Base64-like token pattern: matches base64-encoded tokens (≥16 chars)
fn base64_token_regex() -> &'static Regex {
    static BASE64_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
    });
    &BASE64_TOKEN_REGEX
}

/// Redacts sensitive information from a string.
///
/// This function conservatively masks:
/// - Emails: keeps first character of local part, replaces rest with ***, keeps full domain
/// - Opaque tokens: replaces base64-like runs (≥16 chars) with [REDACTED_TOKEN]
///
/// Order: emails first, then tokens, to avoid double-processing.
pub fn redact(input: &str) -> String {
    let email_redacted = email_regex().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(at_pos) if at_pos > 0 => {
                let first = &full_match[..1];
                let domain = &full_match[at_pos..];
                format!("{first}***{domain}")
            }
            _ => "***".to_string(),
        }
    });

    base64_token_regex()
        .replace_all(&email_redacted, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts its contents when formatted into log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{redact, Redacted};

    #[test]
    fn redacts_email_local_part() {
        let out = redact("login attempt for alice@example.com failed");
        assert!(out.contains("a***@example.com"));
        assert!(!out.contains("alice@example.com"));
    }

    #[test]
    fn redacts_long_token_runs() {
        let out = redact("bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
        assert!(out.contains("[REDACTED_TOKEN]"));
    }

    #[test]
    fn display_wrapper_redacts() {
        let rendered = format!("{}", Redacted("bob@example.com"));
        assert_eq!(rendered, "b***@example.com");
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(redact("no pii here"), "no pii here");
    }
}
