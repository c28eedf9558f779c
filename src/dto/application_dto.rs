use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::phone::normalize_phone;

/// Payload for POST /api/applications. Beyond the four required fields, the
/// public multi-step form sends a wide tail of optional free-text fields that
/// all default to empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationPayload {
    #[serde(default)]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    pub full_name: String,
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "crate::utils::phone::validate_phone"))]
    pub phone: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Job title is required"))]
    pub job_title: String,
    pub job_id: Option<Uuid>,
    #[serde(default)]
    #[validate(length(max = 50, message = "Experience must not exceed 50 characters"))]
    pub experience: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Qualification must not exceed 100 characters"))]
    pub qualification: String,
    #[serde(default)]
    #[validate(length(max = 1000, message = "Cover letter must not exceed 1000 characters"))]
    pub cover_letter: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub expected_salary: String,
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year_of_passing: String,
    #[serde(default)]
    pub percentage: String,
    #[serde(default)]
    pub previous_company: String,
    #[serde(default)]
    pub previous_role: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub languages_spoken: String,
    pub final_date: Option<NaiveDate>,
}

impl CreateApplicationPayload {
    /// Trim everything, lower-case the email and strip phone separators
    /// before the rule set runs. The stored phone is the normalized form.
    pub fn normalized(mut self) -> Self {
        self.full_name = self.full_name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self.phone = normalize_phone(self.phone.trim());
        self.job_title = self.job_title.trim().to_string();
        self.experience = self.experience.trim().to_string();
        self.qualification = self.qualification.trim().to_string();
        self.cover_letter = self.cover_letter.trim().to_string();
        self.resume_url = self.resume_url.trim().to_string();
        self.address = self.address.trim().to_string();
        self.city = self.city.trim().to_string();
        self.state = self.state.trim().to_string();
        self.pincode = self.pincode.trim().to_string();
        self.department = self.department.trim().to_string();
        self.expected_salary = self.expected_salary.trim().to_string();
        self.institution = self.institution.trim().to_string();
        self.year_of_passing = self.year_of_passing.trim().to_string();
        self.percentage = self.percentage.trim().to_string();
        self.previous_company = self.previous_company.trim().to_string();
        self.previous_role = self.previous_role.trim().to_string();
        self.skills = self.skills.trim().to_string();
        self.languages_spoken = self.languages_spoken.trim().to_string();
        self
    }
}

/// Query filters for GET /api/applications.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListQuery {
    pub job_title: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: Option<String>,
}
