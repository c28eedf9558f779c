pub mod application_repo;
pub mod contact_repo;
pub mod job_repo;
pub mod user_repo;

pub use application_repo::PgApplicationRepository;
pub use contact_repo::PgContactRepository;
pub use job_repo::PgJobRepository;
pub use user_repo::PgUserRepository;
