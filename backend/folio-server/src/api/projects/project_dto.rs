use folio_core::Project;

use chrono::SecondsFormat;
use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub featured: bool,
    /// RFC 3339, millisecond precision, UTC
    pub created_at: String,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            image_url: p.image_url,
            demo_url: p.demo_url,
            github_url: p.github_url,
            tech_stack: p.tech_stack,
            featured: p.featured,
            created_at: p.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
