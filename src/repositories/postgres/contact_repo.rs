use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::contact_dto::CreateContactPayload;
use crate::error::Result;
use crate::models::contact::Contact;
use crate::repositories::ContactRepository;

const CONTACT_COLUMNS: &str =
    "id, name, email, phone, subject, message, status, created_at, updated_at";

#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn list(&self) -> Result<Vec<Contact>> {
        let query = format!(
            "SELECT {} FROM contacts ORDER BY created_at DESC",
            CONTACT_COLUMNS
        );
        let contacts = sqlx::query_as::<_, Contact>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(contacts)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Contact>> {
        let query = format!("SELECT {} FROM contacts WHERE id = $1", CONTACT_COLUMNS);
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contact)
    }

    async fn create(&self, payload: CreateContactPayload) -> Result<Contact> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone, subject, message) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            CONTACT_COLUMNS
        );
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.phone.as_deref().unwrap_or(""))
            .bind(&payload.subject)
            .bind(&payload.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(contact)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Contact>> {
        let query = format!(
            "UPDATE contacts SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            CONTACT_COLUMNS
        );
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contact)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
