use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::application_dto::{ApplicationListQuery, CreateApplicationPayload};
use crate::error::Result;
use crate::models::application::Application;
use crate::repositories::ApplicationRepository;

const APPLICATION_COLUMNS: &str = "id, full_name, email, phone, job_title, job_id, experience, \
     qualification, cover_letter, resume_url, address, city, state, pincode, department, \
     expected_salary, available_from, institution, year_of_passing, percentage, \
     previous_company, previous_role, skills, languages_spoken, final_date, status, \
     applied_date, created_at, updated_at";

#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn list(&self, filters: ApplicationListQuery) -> Result<Vec<Application>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if let Some(job_title) = filters.job_title {
            conditions.push(format!("job_title ILIKE ${}", args.len() + 1));
            args.push(format!("%{}%", job_title));
        }
        if let Some(email) = filters.email {
            conditions.push(format!("email = ${}", args.len() + 1));
            args.push(email.to_lowercase());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {} FROM applications {} ORDER BY applied_date DESC",
            APPLICATION_COLUMNS, where_clause
        );

        let mut statement = sqlx::query_as::<_, Application>(&query);
        for value in &args {
            statement = statement.bind(value);
        }
        let applications = statement.fetch_all(&self.pool).await?;
        Ok(applications)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Application>> {
        let query = format!(
            "SELECT {} FROM applications WHERE id = $1",
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(application)
    }

    async fn create(&self, payload: CreateApplicationPayload) -> Result<Application> {
        let query = format!(
            "INSERT INTO applications (full_name, email, phone, job_title, job_id, experience, \
             qualification, cover_letter, resume_url, address, city, state, pincode, department, \
             expected_salary, available_from, institution, year_of_passing, percentage, \
             previous_company, previous_role, skills, languages_spoken, final_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, $19, $20, $21, $22, $23, $24) \
             RETURNING {}",
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(&payload.full_name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.job_title)
            .bind(payload.job_id)
            .bind(&payload.experience)
            .bind(&payload.qualification)
            .bind(&payload.cover_letter)
            .bind(&payload.resume_url)
            .bind(&payload.address)
            .bind(&payload.city)
            .bind(&payload.state)
            .bind(&payload.pincode)
            .bind(&payload.department)
            .bind(&payload.expected_salary)
            .bind(payload.available_from)
            .bind(&payload.institution)
            .bind(&payload.year_of_passing)
            .bind(&payload.percentage)
            .bind(&payload.previous_company)
            .bind(&payload.previous_role)
            .bind(&payload.skills)
            .bind(&payload.languages_spoken)
            .bind(payload.final_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(application)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Application>> {
        let query = format!(
            "UPDATE applications SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(application)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_by_job_title(&self, job_title: &str) -> Result<Vec<Application>> {
        let query = format!(
            "SELECT {} FROM applications WHERE job_title ILIKE $1 ORDER BY applied_date DESC",
            APPLICATION_COLUMNS
        );
        let applications = sqlx::query_as::<_, Application>(&query)
            .bind(format!("%{}%", job_title))
            .fetch_all(&self.pool)
            .await?;
        Ok(applications)
    }
}
