pub mod contact_repository;
pub mod project_repository;
pub mod sponsor_repository;
