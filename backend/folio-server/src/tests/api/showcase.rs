use crate::showcase_projects;

use folio_core::{ProjectPayload, validate_project_input};

use std::collections::HashSet;

#[test]
fn test_showcase_projects_pass_validation() {
    for project in showcase_projects() {
        let payload = ProjectPayload {
            title: Some(project.title.clone()),
            description: Some(project.description.clone()),
            image_url: project.image_url.clone(),
            demo_url: project.demo_url.clone(),
            github_url: project.github_url.clone(),
            tech_stack: Some(project.tech_stack.clone()),
            featured: Some(project.featured),
        };

        let validated = validate_project_input(payload);
        assert!(validated.is_ok(), "{} should be valid", project.title);
        assert_eq!(validated.unwrap(), project);
    }
}

#[test]
fn test_showcase_titles_are_unique_and_some_are_featured() {
    let projects = showcase_projects();
    let titles: HashSet<&str> = projects.iter().map(|p| p.title.as_str()).collect();

    assert_eq!(titles.len(), projects.len());
    assert!(projects.iter().any(|p| p.featured));
    assert!(projects.iter().any(|p| !p.featured));
}
