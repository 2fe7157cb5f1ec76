#![cfg(feature = "serde")]

use roster_layout::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_save_and_load_roster() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");

    let mut doc = Document::default();
    doc.replace_members(
        1,
        vec![
            Member::new("Anna", "/photos/Anna - Sygeplejerske.jpg").with_job_title("Sygeplejerske"),
            Member {
                is_intern: true,
                ..Member::new("Bo", "/photos/Bo.png")
            },
        ],
    )
    .unwrap();

    save_roster(&doc, &path).await.unwrap();
    let loaded = load_roster(&path).await.unwrap();

    assert_eq!(loaded, doc);
}

#[tokio::test]
async fn test_load_missing_roster() {
    let dir = TempDir::new().unwrap();
    let result = load_roster(dir.path().join("missing.json")).await;
    assert!(matches!(result, Err(RosterError::Io(_))));
}

#[tokio::test]
async fn test_load_roster_without_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    tokio::fs::write(&path, r#"{ "title": "Kun titel" }"#).await.unwrap();

    let doc = load_roster(&path).await.unwrap();
    assert_eq!(doc.title, "Kun titel");
    assert!(doc.sections.is_empty());
    assert_eq!(paginate(&doc).len(), 1);
}
