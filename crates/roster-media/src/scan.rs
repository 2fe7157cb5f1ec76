use crate::types::{MediaError, Result};
use log::{debug, info};
use roster_layout::Member;
use std::path::Path;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Separator between a person's name and job title in a photo filename
const JOB_TITLE_SEPARATOR: &str = " - ";

/// List the staff photos in `directory` as members.
///
/// Only the directory itself is read (no recursion). Members are sorted by
/// file name so repeated scans give the same order.
pub async fn read_staff_images(directory: impl AsRef<Path>) -> Result<Vec<Member>> {
    let directory = directory.as_ref();
    if !tokio::fs::try_exists(directory).await? {
        return Err(MediaError::DirectoryNotFound(directory.to_owned()));
    }

    let mut entries = tokio::fs::read_dir(directory).await?;
    let mut found = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let path = entry.path();
        if !is_supported_image(&path) {
            debug!("Skipping non-image file {}", path.display());
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            debug!("Skipping file with non UTF-8 name {}", path.display());
            continue;
        };

        let (name, job_title) = parse_filename(stem);
        found.push((
            entry.file_name(),
            Member {
                name,
                job_title,
                image_path: path.to_string_lossy().into_owned(),
                is_intern: false,
            },
        ));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    info!(
        "Found {} staff photo(s) in {}",
        found.len(),
        directory.display()
    );

    Ok(found.into_iter().map(|(_, member)| member).collect())
}

/// True for jpg, jpeg and png files, ignoring case
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Split a filename stem into name and job title at the last `" - "`.
///
/// `"Anna Hansen - Sygeplejerske"` gives `("Anna Hansen", Some("Sygeplejerske"))`;
/// a stem without the separator is all name.
pub fn parse_filename(stem: &str) -> (String, Option<String>) {
    match stem.rfind(JOB_TITLE_SEPARATOR) {
        Some(pos) => (
            stem[..pos].to_string(),
            Some(stem[pos + JOB_TITLE_SEPARATOR.len()..].to_string()),
        ),
        None => (stem.to_string(), None),
    }
}
