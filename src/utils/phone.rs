use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

/// 10-digit Indian mobile number: starts with 6-9.
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[6-9]\d{9}$").expect("valid phone regex"))
}

/// Strip spaces, dashes and plus signs so formatted numbers like
/// "+91 98765-43210" can be validated against the bare pattern.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '+')
        .collect()
}

pub fn is_valid_phone(normalized: &str) -> bool {
    phone_pattern().is_match(normalized)
}

/// validator hook for required phone fields. Expects the value to already be
/// normalized by the DTO's trim pass.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if is_valid_phone(&normalize_phone(value)) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Please provide a valid 10-digit Indian phone number".into());
        Err(err)
    }
}
