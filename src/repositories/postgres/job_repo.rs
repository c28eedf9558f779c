use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::job_dto::{JobListQuery, JobPayload};
use crate::error::Result;
use crate::models::job::{Job, DEFAULT_CATEGORY, DEFAULT_JOB_TYPE};
use crate::repositories::JobRepository;

const JOB_COLUMNS: &str = "id, title, location, salary, qualification, experience, key_skills, \
     description, category, job_type, is_active, posted_date, created_at, updated_at";

#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn list(&self, filters: JobListQuery) -> Result<Vec<Job>> {
        let mut conditions = vec!["is_active = TRUE".to_string()];
        let mut args: Vec<String> = Vec::new();

        if let Some(category) = filters.category {
            conditions.push(format!("category ILIKE ${}", args.len() + 1));
            args.push(format!("%{}%", category));
        }
        if let Some(location) = filters.location {
            conditions.push(format!("location ILIKE ${}", args.len() + 1));
            args.push(format!("%{}%", location));
        }
        if let Some(job_type) = filters.job_type {
            conditions.push(format!("job_type ILIKE ${}", args.len() + 1));
            args.push(format!("%{}%", job_type));
        }

        let query = format!(
            "SELECT {} FROM jobs WHERE {} ORDER BY posted_date DESC",
            JOB_COLUMNS,
            conditions.join(" AND ")
        );

        let mut statement = sqlx::query_as::<_, Job>(&query);
        for value in &args {
            statement = statement.bind(value);
        }
        let jobs = statement.fetch_all(&self.pool).await?;
        Ok(jobs)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        let query = format!(
            "SELECT {} FROM jobs WHERE id = $1 AND is_active = TRUE",
            JOB_COLUMNS
        );
        let job = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    async fn create(&self, payload: JobPayload) -> Result<Job> {
        let query = format!(
            "INSERT INTO jobs (title, location, salary, qualification, experience, key_skills, \
             description, category, job_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {}",
            JOB_COLUMNS
        );
        let job = sqlx::query_as::<_, Job>(&query)
            .bind(&payload.title)
            .bind(&payload.location)
            .bind(&payload.salary)
            .bind(&payload.qualification)
            .bind(&payload.experience)
            .bind(&payload.key_skills)
            .bind(payload.description.as_deref().unwrap_or(""))
            .bind(payload.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
            .bind(payload.job_type.as_deref().unwrap_or(DEFAULT_JOB_TYPE))
            .fetch_one(&self.pool)
            .await?;
        Ok(job)
    }

    async fn update(&self, id: Uuid, payload: JobPayload) -> Result<Option<Job>> {
        let query = format!(
            "UPDATE jobs SET \
                title = $2, \
                location = $3, \
                salary = $4, \
                qualification = $5, \
                experience = $6, \
                key_skills = $7, \
                description = COALESCE($8, description), \
                category = COALESCE($9, category), \
                job_type = COALESCE($10, job_type), \
                updated_at = NOW() \
             WHERE id = $1 AND is_active = TRUE \
             RETURNING {}",
            JOB_COLUMNS
        );
        let job = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&payload.title)
            .bind(&payload.location)
            .bind(&payload.salary)
            .bind(&payload.qualification)
            .bind(&payload.experience)
            .bind(&payload.key_skills)
            .bind(payload.description.as_deref())
            .bind(payload.category.as_deref())
            .bind(payload.job_type.as_deref())
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result =
            sqlx::query("UPDATE jobs SET is_active = FALSE, updated_at = NOW() WHERE id = $1 AND is_active = TRUE")
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Job>> {
        let query = format!(
            "SELECT {} FROM jobs \
             WHERE is_active = TRUE \
               AND to_tsvector('english', title || ' ' || location || ' ' || key_skills || ' ' || category) \
                   @@ plainto_tsquery('english', $1) \
             ORDER BY posted_date DESC",
            JOB_COLUMNS
        );
        let jobs = sqlx::query_as::<_, Job>(&query)
            .bind(keyword)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }
}
