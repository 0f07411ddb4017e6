use crate::documents::new_identity;

use folio_core::{NewProject, Project};

use bson::DateTime;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime,
}

impl ProjectDocument {
    pub fn new(input: NewProject) -> Self {
        let (id, created_at) = new_identity();
        Self {
            id,
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            demo_url: input.demo_url,
            github_url: input.github_url,
            tech_stack: input.tech_stack,
            featured: input.featured,
            created_at,
        }
    }
}

impl From<ProjectDocument> for Project {
    fn from(document: ProjectDocument) -> Self {
        NewProject {
            title: document.title,
            description: document.description,
            image_url: document.image_url,
            demo_url: document.demo_url,
            github_url: document.github_url,
            tech_stack: document.tech_stack,
            featured: document.featured,
        }
        .into_project(document.id.to_hex(), document.created_at.to_chrono())
    }
}
