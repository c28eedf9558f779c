use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::phone::normalize_phone;

/// Payload for POST /api/contact.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    #[serde(default)]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(custom(function = "crate::utils::phone::validate_phone"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(length(min = 5, max = 200, message = "Subject must be between 5 and 200 characters"))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 10, max = 2000, message = "Message must be between 10 and 2000 characters"))]
    pub message: String,
}

impl CreateContactPayload {
    /// Trim fields, lower-case the email and normalize the optional phone.
    /// A blank phone is treated as absent rather than invalid.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.phone = self
            .phone
            .map(|p| normalize_phone(p.trim()))
            .filter(|p| !p.is_empty());
        self.subject = self.subject.trim().to_string();
        self.message = self.message.trim().to_string();
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateContactPayload {
        CreateContactPayload {
            name: "Ravi Kumar".into(),
            email: "Ravi@Example.com".into(),
            phone: None,
            subject: "Hiring enquiry".into(),
            message: "Do you have openings in Agra?".into(),
        }
    }

    #[test]
    fn phone_is_optional() {
        assert!(valid_payload().normalized().validate().is_ok());
    }

    #[test]
    fn blank_phone_is_treated_as_absent() {
        let payload = CreateContactPayload {
            phone: Some("   ".into()),
            ..valid_payload()
        };
        let normalized = payload.normalized();
        assert!(normalized.phone.is_none());
        assert!(normalized.validate().is_ok());
    }

    #[test]
    fn present_phone_must_match_pattern() {
        let payload = CreateContactPayload {
            phone: Some("12345".into()),
            ..valid_payload()
        };
        let errors = payload.normalized().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn short_subject_fails() {
        let payload = CreateContactPayload {
            subject: "Hi".into(),
            ..valid_payload()
        };
        let errors = payload.normalized().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("subject"));
    }
}
