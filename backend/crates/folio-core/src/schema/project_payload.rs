use crate::schema::rules::IssueCollector;
use crate::{NewProject, ValidationError};

use serde::Deserialize;

/// Wire shape of `POST /api/projects`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub demo_url: Option<String>,

    #[serde(default)]
    pub github_url: Option<String>,

    /// Defaults to an empty list
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,

    /// Defaults to `false`
    #[serde(default)]
    pub featured: Option<bool>,
}

/// Validate a project payload.
///
/// `title` and `description` must be non-empty; the three links must be
/// well-formed URLs when present.
#[track_caller]
pub fn validate_project_input(payload: ProjectPayload) -> Result<NewProject, ValidationError> {
    let mut issues = IssueCollector::new();

    let title = issues.required_text("title", payload.title, "Title is required");
    let description =
        issues.required_text("description", payload.description, "Description is required");
    let image_url = issues.optional_url("imageUrl", payload.image_url);
    let demo_url = issues.optional_url("demoUrl", payload.demo_url);
    let github_url = issues.optional_url("githubUrl", payload.github_url);

    issues.finish(
        "project",
        NewProject {
            title,
            description,
            image_url,
            demo_url,
            github_url,
            tech_stack: payload.tech_stack.unwrap_or_default(),
            featured: payload.featured.unwrap_or(false),
        },
    )
}
