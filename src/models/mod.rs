pub mod application;
pub mod contact;
pub mod job;
pub mod user;
