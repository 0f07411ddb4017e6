//! Project entity - a showcased piece of work on the portfolio.

use chrono::{DateTime, Utc};

/// A persisted project.
/// `id` and `created_at` are assigned by the storage layer and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    /// Ordered technology tags, empty when none were given
    pub tech_stack: Vec<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// A validated project creation request
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub featured: bool,
}

impl NewProject {
    /// Create a project input with no links, no tags, not featured
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: None,
            demo_url: None,
            github_url: None,
            tech_stack: Vec::new(),
            featured: false,
        }
    }

    /// Attach the server-assigned fields
    pub fn into_project(self, id: String, created_at: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            demo_url: self.demo_url,
            github_url: self.github_url,
            tech_stack: self.tech_stack,
            featured: self.featured,
            created_at,
        }
    }
}
