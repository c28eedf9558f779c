//! In-memory repository fakes. They back the API tests and honor the same
//! contracts as the Postgres implementations: soft-delete visibility,
//! case-insensitive partial matching, newest-first ordering, and the
//! uniqueness conflict on user creation.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::application_dto::{ApplicationListQuery, CreateApplicationPayload};
use crate::dto::contact_dto::CreateContactPayload;
use crate::dto::job_dto::{JobListQuery, JobPayload};
use crate::error::{Error, Result};
use crate::models::application::{Application, DEFAULT_APPLICATION_STATUS};
use crate::models::contact::{Contact, DEFAULT_CONTACT_STATUS};
use crate::models::job::{Job, DEFAULT_CATEGORY, DEFAULT_JOB_TYPE};
use crate::models::user::{User, DEFAULT_ROLE};
use crate::repositories::{
    ApplicationRepository, ContactRepository, JobRepository, NewUser, UserRepository,
};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Clone, Default)]
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self, filters: JobListQuery) -> Result<Vec<Job>> {
        let jobs = self.jobs.read().await;
        let mut matched: Vec<Job> = jobs
            .values()
            .filter(|j| j.is_active)
            .filter(|j| {
                filters
                    .category
                    .as_deref()
                    .map_or(true, |c| contains_ci(&j.category, c))
            })
            .filter(|j| {
                filters
                    .location
                    .as_deref()
                    .map_or(true, |l| contains_ci(&j.location, l))
            })
            .filter(|j| {
                filters
                    .job_type
                    .as_deref()
                    .map_or(true, |t| contains_ci(&j.job_type, t))
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        Ok(matched)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).filter(|j| j.is_active).cloned())
    }

    async fn create(&self, payload: JobPayload) -> Result<Job> {
        let now = Utc::now();
        let job = Job {
            id: Uuid::new_v4(),
            title: payload.title,
            location: payload.location,
            salary: payload.salary,
            qualification: payload.qualification,
            experience: payload.experience,
            key_skills: payload.key_skills,
            description: payload.description.unwrap_or_default(),
            category: payload.category.unwrap_or_else(|| DEFAULT_CATEGORY.into()),
            job_type: payload.job_type.unwrap_or_else(|| DEFAULT_JOB_TYPE.into()),
            is_active: true,
            posted_date: now,
            created_at: now,
            updated_at: now,
        };
        self.jobs.write().await.insert(job.id, job.clone());
        Ok(job)
    }

    async fn update(&self, id: Uuid, payload: JobPayload) -> Result<Option<Job>> {
        let mut jobs = self.jobs.write().await;
        let Some(job) = jobs.get_mut(&id).filter(|j| j.is_active) else {
            return Ok(None);
        };
        job.title = payload.title;
        job.location = payload.location;
        job.salary = payload.salary;
        job.qualification = payload.qualification;
        job.experience = payload.experience;
        job.key_skills = payload.key_skills;
        if let Some(description) = payload.description {
            job.description = description;
        }
        if let Some(category) = payload.category {
            job.category = category;
        }
        if let Some(job_type) = payload.job_type {
            job.job_type = job_type;
        }
        job.updated_at = Utc::now();
        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(&id) {
            Some(job) if job.is_active => {
                job.is_active = false;
                job.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Job>> {
        let jobs = self.jobs.read().await;
        let mut matched: Vec<Job> = jobs
            .values()
            .filter(|j| j.is_active)
            .filter(|j| {
                contains_ci(&j.title, keyword)
                    || contains_ci(&j.location, keyword)
                    || contains_ci(&j.key_skills, keyword)
                    || contains_ci(&j.category, keyword)
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
        Ok(matched)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryApplicationRepository {
    applications: Arc<RwLock<HashMap<Uuid, Application>>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn list(&self, filters: ApplicationListQuery) -> Result<Vec<Application>> {
        let applications = self.applications.read().await;
        let mut matched: Vec<Application> = applications
            .values()
            .filter(|a| {
                filters
                    .job_title
                    .as_deref()
                    .map_or(true, |t| contains_ci(&a.job_title, t))
            })
            .filter(|a| {
                filters
                    .email
                    .as_deref()
                    .map_or(true, |e| a.email == e.to_lowercase())
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        Ok(matched)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Application>> {
        Ok(self.applications.read().await.get(&id).cloned())
    }

    async fn create(&self, payload: CreateApplicationPayload) -> Result<Application> {
        let now = Utc::now();
        let application = Application {
            id: Uuid::new_v4(),
            full_name: payload.full_name,
            email: payload.email,
            phone: payload.phone,
            job_title: payload.job_title,
            job_id: payload.job_id,
            experience: payload.experience,
            qualification: payload.qualification,
            cover_letter: payload.cover_letter,
            resume_url: payload.resume_url,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            pincode: payload.pincode,
            department: payload.department,
            expected_salary: payload.expected_salary,
            available_from: payload.available_from,
            institution: payload.institution,
            year_of_passing: payload.year_of_passing,
            percentage: payload.percentage,
            previous_company: payload.previous_company,
            previous_role: payload.previous_role,
            skills: payload.skills,
            languages_spoken: payload.languages_spoken,
            final_date: payload.final_date,
            status: DEFAULT_APPLICATION_STATUS.to_string(),
            applied_date: now,
            created_at: now,
            updated_at: now,
        };
        self.applications
            .write()
            .await
            .insert(application.id, application.clone());
        Ok(application)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Application>> {
        let mut applications = self.applications.write().await;
        let Some(application) = applications.get_mut(&id) else {
            return Ok(None);
        };
        application.status = status.to_string();
        application.updated_at = Utc::now();
        Ok(Some(application.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.applications.write().await.remove(&id).is_some())
    }

    async fn list_by_job_title(&self, job_title: &str) -> Result<Vec<Application>> {
        self.list(ApplicationListQuery {
            job_title: Some(job_title.to_string()),
            email: None,
        })
        .await
    }
}

#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        let mut all: Vec<Contact> = contacts.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Contact>> {
        Ok(self.contacts.read().await.get(&id).cloned())
    }

    async fn create(&self, payload: CreateContactPayload) -> Result<Contact> {
        let now = Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            name: payload.name,
            email: payload.email,
            phone: payload.phone.unwrap_or_default(),
            subject: payload.subject,
            message: payload.message,
            status: DEFAULT_CONTACT_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.contacts.write().await.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Contact>> {
        let mut contacts = self.contacts.write().await;
        let Some(contact) = contacts.get_mut(&id) else {
            return Ok(None);
        };
        contact.status = status.to_string();
        contact.updated_at = Utc::now();
        Ok(Some(contact.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(self.contacts.write().await.remove(&id).is_some())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        for existing in users.values().filter(|u| u.is_active) {
            if existing.email.eq_ignore_ascii_case(&user.email) {
                return Err(Error::Conflict {
                    field: "email".to_string(),
                });
            }
            if existing.username == user.username {
                return Err(Error::Conflict {
                    field: "username".to_string(),
                });
            }
        }
        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            full_name: user.full_name,
            phone: user.phone,
            role: DEFAULT_ROLE.to_string(),
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.is_active && u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.is_active && u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).filter(|u| u.is_active).cloned())
    }

    async fn update_last_login(&self, id: Uuid) -> Result<()> {
        if let Some(user) = self.users.write().await.get_mut(&id) {
            user.last_login = Some(Utc::now());
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) if user.is_active => {
                user.is_active = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
