//! Signup payload validation and normalization

use serde::Deserialize;

/// Longest `source` tag we keep; anything beyond is silently dropped.
pub const MAX_SOURCE_LEN: usize = 120;

#[derive(Debug, Default, Deserialize)]
pub struct SignupPayload {
    pub email: Option<String>,
    pub source: Option<String>,
}

/// Trimmed, lowercased email, or None when missing or blank.
pub fn normalize_email(raw: Option<&str>) -> Option<String> {
    let email = raw?.trim().to_lowercase();
    if email.is_empty() {
        None
    } else {
        Some(email)
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a domain
/// with an interior dot. Deliverability is the mail provider's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(pos) => pos > 0 && pos + 1 < domain.len(),
        None => false,
    }
}

/// First `MAX_SOURCE_LEN` characters of the attribution tag.
pub fn clean_source(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.chars().take(MAX_SOURCE_LEN).collect())
}
