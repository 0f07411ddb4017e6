pub mod project_dto;
pub mod projects;
