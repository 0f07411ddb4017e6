use crate::{ContactRepository, Database, DbError, ProjectRepository, SponsorRepository};

use folio_core::{NewContact, NewProject, NewSponsor};

use chrono::Utc;

fn contact(name: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        message: "Hello".to_string(),
    }
}

#[tokio::test]
async fn when_project_created_then_find_all_returns_it() {
    let repo = ProjectRepository::new(Database::in_memory());

    let created = repo
        .create(NewProject::new("K-Mart E-Commerce", "Storefront"))
        .await
        .unwrap();
    let all = repo.find_all().await.unwrap();

    assert_eq!(all, vec![created.clone()]);
    assert!(!created.id.is_empty());
    assert!(created.created_at <= Utc::now());
}

#[tokio::test]
async fn when_contacts_created_then_newest_listed_first() {
    let repo = ContactRepository::new(Database::in_memory());

    let first = repo.create(contact("Jane")).await.unwrap();
    let second = repo.create(contact("John")).await.unwrap();
    let third = repo.create(contact("Jim")).await.unwrap();

    let ids: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn when_identical_sponsors_created_then_ids_differ() {
    let repo = SponsorRepository::new(Database::in_memory());
    let input = NewSponsor {
        donor_name: "Ada".to_string(),
        message: Some("Keep going".to_string()),
        amount: None,
    };

    let a = repo.create(input.clone()).await.unwrap();
    let b = repo.create(input).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn when_collections_share_a_database_then_records_stay_separate() {
    let db = Database::in_memory();

    ContactRepository::new(db.clone())
        .create(contact("Jane"))
        .await
        .unwrap();

    assert!(ProjectRepository::new(db.clone()).find_all().await.unwrap().is_empty());
    assert!(SponsorRepository::new(db).find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn when_project_batch_created_then_count_matches() {
    let repo = ProjectRepository::new(Database::in_memory());

    let created = repo
        .create_many(vec![
            NewProject::new("One", "First"),
            NewProject::new("Two", "Second"),
        ])
        .await
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn when_project_batch_created_then_listed_in_batch_order() {
    let repo = ProjectRepository::new(Database::in_memory());
    let titles = ["Glow Folio", "Threat Detection", "English Trainer", "Crypton Watch"];

    let created = repo
        .create_many(
            titles
                .iter()
                .map(|title| NewProject::new(*title, "Showcase"))
                .collect(),
        )
        .await
        .unwrap();
    let listed = repo.find_all().await.unwrap();

    let created_titles: Vec<&str> = created.iter().map(|p| p.title.as_str()).collect();
    let listed_titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(created_titles, titles);
    assert_eq!(listed_titles, titles);
}

#[tokio::test]
async fn when_database_unavailable_then_repository_reports_unavailable() {
    let repo = ProjectRepository::new(Database::unavailable());

    let listed = repo.find_all().await;
    let created = repo.create(NewProject::new("Title", "Description")).await;

    assert!(matches!(listed, Err(DbError::Unavailable { .. })));
    assert!(matches!(created, Err(DbError::Unavailable { .. })));
}
