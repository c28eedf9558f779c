use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Allowed values for the `type` field.
pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Internship", "Remote"];

pub const DEFAULT_JOB_TYPE: &str = "Full-time";
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub qualification: String,
    pub experience: String,
    pub key_skills: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub is_active: bool,
    pub posted_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
