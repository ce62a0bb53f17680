use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ModalError;

// local part, @, domain, dot, tld; each part non-empty
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+@.+\..+$").unwrap());

/// Trims the input and checks it looks like an email address.
/// Returns the trimmed address on success.
pub fn validate_email(raw: &str) -> Result<&str, ModalError> {
    let email = raw.trim();
    if EMAIL_RE.is_match(email) {
        Ok(email)
    } else {
        Err(ModalError::InvalidEmail { value: email.to_string() })
    }
}
