use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const APPLICATION_STATUSES: &[&str] =
    &["pending", "reviewed", "shortlisted", "rejected", "accepted"];

pub const DEFAULT_APPLICATION_STATUS: &str = "pending";

/// A job application submitted through the public multi-step form.
/// Optional free-text fields default to empty strings, matching what the
/// form sends when a step is skipped.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub job_id: Option<Uuid>,
    pub experience: String,
    pub qualification: String,
    pub cover_letter: String,
    pub resume_url: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub department: String,
    pub expected_salary: String,
    pub available_from: Option<NaiveDate>,
    pub institution: String,
    pub year_of_passing: String,
    pub percentage: String,
    pub previous_company: String,
    pub previous_role: String,
    pub skills: String,
    pub languages_spoken: String,
    pub final_date: Option<NaiveDate>,
    pub status: String,
    pub applied_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
