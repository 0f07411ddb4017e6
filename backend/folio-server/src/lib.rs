pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    contacts::{
        contact_dto::ContactDto,
        contacts::{create_contact, list_contacts},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_json::ApiJson,
    projects::{
        project_dto::ProjectDto,
        projects::{create_project, list_projects},
    },
    seed::{seed::seed_projects, seed_response::SeedResponse, showcase::showcase_projects},
    sponsors::{
        sponsor_dto::SponsorDto,
        sponsors::{create_sponsor, list_sponsors},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
