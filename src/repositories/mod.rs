//! Capability interfaces over the document store. Handlers never touch the
//! store directly: every read and mutation goes through one of these traits,
//! which is where soft-delete visibility and default sort order are enforced.
//! The Postgres implementations live in [`postgres`]; [`memory`] provides
//! in-process fakes for API tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::dto::application_dto::{ApplicationListQuery, CreateApplicationPayload};
use crate::dto::contact_dto::CreateContactPayload;
use crate::dto::job_dto::{JobListQuery, JobPayload};
use crate::error::Result;
use crate::models::application::Application;
use crate::models::contact::Contact;
use crate::models::job::Job;
use crate::models::user::User;

/// Input for [`UserRepository::create`]. The password is hashed by the auth
/// layer before it reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Active jobs only, optionally filtered by case-insensitive partial
    /// match on category/location/type, newest first.
    async fn list(&self, filters: JobListQuery) -> Result<Vec<Job>>;
    /// Active jobs only; a soft-deleted id reads as absent.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Job>>;
    async fn create(&self, payload: JobPayload) -> Result<Job>;
    /// Replaces the required fields; optional fields keep their stored value
    /// when the payload omits them.
    async fn update(&self, id: Uuid, payload: JobPayload) -> Result<Option<Job>>;
    /// Soft delete: flips is_active, keeps the record.
    async fn delete(&self, id: Uuid) -> Result<bool>;
    /// Keyword search over title/location/keySkills/category, active jobs
    /// only. No match is an empty list, never an error.
    async fn search(&self, keyword: &str) -> Result<Vec<Job>>;
}

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn list(&self, filters: ApplicationListQuery) -> Result<Vec<Application>>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Application>>;
    async fn create(&self, payload: CreateApplicationPayload) -> Result<Application>;
    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Application>>;
    /// Hard delete.
    async fn delete(&self, id: Uuid) -> Result<bool>;
    async fn list_by_job_title(&self, job_title: &str) -> Result<Vec<Application>>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Contact>>;
    async fn create(&self, payload: CreateContactPayload) -> Result<Contact>;
    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Contact>>;
    /// Hard delete.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Error::Conflict` naming the colliding field when the
    /// store's uniqueness constraint rejects the insert.
    async fn create(&self, user: NewUser) -> Result<User>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn update_last_login(&self, id: Uuid) -> Result<()>;
    /// Soft delete, freeing the username/email for re-registration.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
