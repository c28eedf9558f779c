use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::repositories::{NewUser, UserRepository};

const USER_COLUMNS: &str = "id, username, email, password_hash, full_name, phone, role, \
     is_active, created_at, last_login";

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> Result<User> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, full_name, phone) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            USER_COLUMNS
        );
        let created = sqlx::query_as::<_, User>(&query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(&user.phone)
            .fetch_one(&self.pool)
            .await;

        match created {
            Ok(created) => Ok(created),
            // The partial unique indexes are the authority on identity
            // collisions; the handler's pre-check is only a fast path.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                let field = if db.constraint().is_some_and(|c| c.contains("email")) {
                    "email"
                } else {
                    "username"
                };
                Err(Error::Conflict {
                    field: field.to_string(),
                })
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE username = $1 AND is_active = TRUE",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE lower(email) = lower($1) AND is_active = TRUE",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let query = format!(
            "SELECT {} FROM users WHERE id = $1 AND is_active = TRUE",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update_last_login(&self, id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET last_login = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result =
            sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1 AND is_active = TRUE")
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
