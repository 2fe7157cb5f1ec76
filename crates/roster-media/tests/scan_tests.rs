use image::RgbImage;
use roster_media::*;
use std::path::Path;
use tempfile::TempDir;

fn write_photo(dir: &Path, file_name: &str, width: u32, height: u32) {
    RgbImage::new(width, height).save(dir.join(file_name)).unwrap();
}

#[tokio::test]
async fn test_read_staff_images() {
    let dir = TempDir::new().unwrap();
    write_photo(dir.path(), "Bo Nielsen.png", 8, 8);
    write_photo(dir.path(), "Anna Hansen - Sygeplejerske.jpg", 8, 8);
    std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
    std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

    let members = read_staff_images(dir.path()).await.unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Anna Hansen");
    assert_eq!(members[0].job_title.as_deref(), Some("Sygeplejerske"));
    assert!(members[0].image_path.ends_with("Anna Hansen - Sygeplejerske.jpg"));
    assert!(!members[0].is_intern);

    assert_eq!(members[1].name, "Bo Nielsen");
    assert_eq!(members[1].job_title, None);
}

#[tokio::test]
async fn test_read_staff_images_uppercase_extension() {
    let dir = TempDir::new().unwrap();
    write_photo(dir.path(), "Karen.jpg", 4, 4);
    std::fs::rename(dir.path().join("Karen.jpg"), dir.path().join("Karen.JPG")).unwrap();

    let members = read_staff_images(dir.path()).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Karen");
}

#[tokio::test]
async fn test_read_staff_images_empty_directory() {
    let dir = TempDir::new().unwrap();
    let members = read_staff_images(dir.path()).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn test_read_staff_images_missing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    match read_staff_images(&missing).await {
        Err(MediaError::DirectoryNotFound(path)) => assert_eq!(path, missing),
        other => panic!("Expected DirectoryNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_image_data() {
    let dir = TempDir::new().unwrap();
    write_photo(dir.path(), "big.png", 1000, 500);

    let url = get_image_data(dir.path().join("big.png")).await.unwrap();
    assert!(url.starts_with("data:image/jpeg;base64,"));
}

#[tokio::test]
async fn test_get_image_data_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = get_image_data(dir.path().join("gone.jpg")).await;
    assert!(matches!(result, Err(MediaError::ImageNotFound(_))));
}

#[tokio::test]
async fn test_get_image_data_not_an_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fake.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    let result = get_image_data(&path).await;
    assert!(matches!(result, Err(MediaError::Image(_))));
}

#[tokio::test]
async fn test_cache_get_or_load() {
    let dir = TempDir::new().unwrap();
    write_photo(dir.path(), "a.png", 10, 10);
    let path = dir.path().join("a.png").to_string_lossy().into_owned();

    let mut cache = ImageCache::new(2);
    let first = cache.get_or_load(&path).await.unwrap();
    assert!(cache.has(&path));

    // Served from the cache even once the file is gone
    std::fs::remove_file(&path).unwrap();
    let second = cache.get_or_load(&path).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_scanned_members_paginate() {
    let dir = TempDir::new().unwrap();
    for i in 0..7 {
        write_photo(dir.path(), &format!("Person {} - Rolle.png", i), 2, 2);
    }

    let mut doc = roster_layout::Document::default();
    doc.replace_members(0, read_staff_images(dir.path()).await.unwrap())
        .unwrap();

    let pages = roster_layout::paginate(&doc);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].sections[0].title, "Administrationen");
    assert_eq!(pages[0].sections[0].members.len(), 7);
}
