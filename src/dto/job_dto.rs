use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for POST /api/jobs and PUT /api/jobs/:id. Required fields default
/// to empty strings on deserialization so a missing field fails the same
/// length rule as a blank one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[serde(default)]
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Location is required and must not exceed 100 characters"))]
    pub location: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Salary is required and must not exceed 100 characters"))]
    pub salary: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Qualification is required and must not exceed 200 characters"))]
    pub qualification: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Experience is required and must not exceed 100 characters"))]
    pub experience: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 300, message = "Key skills are required and must not exceed 300 characters"))]
    pub key_skills: String,
    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

impl JobPayload {
    /// Trim every field before validation, mirroring the rule sets which all
    /// operate on trimmed input.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.location = self.location.trim().to_string();
        self.salary = self.salary.trim().to_string();
        self.qualification = self.qualification.trim().to_string();
        self.experience = self.experience.trim().to_string();
        self.key_skills = self.key_skills.trim().to_string();
        self.description = self.description.map(|d| d.trim().to_string());
        self.category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self.job_type = self
            .job_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }
}

/// Query filters for GET /api/jobs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> JobPayload {
        JobPayload {
            title: "Cook".into(),
            location: "Agra".into(),
            salary: "10k".into(),
            qualification: "10th".into(),
            experience: "Fresher".into(),
            key_skills: "Cooking".into(),
            description: None,
            category: None,
            job_type: None,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().normalized().validate().is_ok());
    }

    #[test]
    fn whitespace_only_required_field_fails() {
        let payload = JobPayload {
            location: "   ".into(),
            ..valid_payload()
        };
        let errors = payload.normalized().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("location"));
    }

    #[test]
    fn short_title_fails() {
        let payload = JobPayload {
            title: "ab".into(),
            ..valid_payload()
        };
        let errors = payload.normalized().validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
