pub mod cascade;
pub mod password;
pub mod repository;
pub mod types;
pub mod upload;
