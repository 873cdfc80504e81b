//! Input validation and message sanitization helpers.
//!
//! Endpoint crates validate every caller-supplied path segment before it is
//! interpolated into a URL, and every error message coming back from the
//! server is sanitized before it is stored in an error value.

use std::sync::LazyLock;

use regex_lite::Regex;

/// amoCRM access and refresh tokens are JWTs.
static JWT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"eyJ[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]+")
        .expect("token pattern is valid")
});

static BEARER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bearer\s+[A-Za-z0-9._~+/=-]+").expect("bearer pattern is valid")
});

/// Maximum length of a sanitized message before truncation.
const MAX_MESSAGE_LENGTH: usize = 500;

/// Sanitize an error message to prevent exposing sensitive data.
///
/// - Redacts JWT-shaped tokens and `Bearer ...` values
/// - Truncates messages longer than 500 bytes
pub fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = JWT_PATTERN
        .replace_all(message, "[REDACTED_TOKEN]")
        .to_string();
    sanitized = BEARER_PATTERN
        .replace_all(&sanitized, "Bearer [REDACTED]")
        .to_string();

    if sanitized.len() > MAX_MESSAGE_LENGTH {
        let mut cut = MAX_MESSAGE_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

/// Returns true if `segment` is a safe entity path segment
/// (`leads`, `custom_fields`, ...): non-empty lowercase ASCII and underscores.
#[must_use]
pub fn is_safe_entity_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment.len() <= 64
        && segment.chars().all(|c| c.is_ascii_lowercase() || c == '_')
}

/// URL-encode a parameter value.
#[must_use]
pub fn encode_param(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
