pub mod crypto;
pub mod phone;
pub mod token;
