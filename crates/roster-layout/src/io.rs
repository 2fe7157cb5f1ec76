use crate::types::*;
use std::path::Path;

/// Load a roster from a JSON file
pub async fn load_roster(path: impl AsRef<Path>) -> Result<Document> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    let document = serde_json::from_slice(&bytes)
        .map_err(|e| RosterError::Config(format!("Failed to parse roster: {}", e)))?;
    Ok(document)
}

/// Save a roster to a JSON file
pub async fn save_roster(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| RosterError::Config(format!("Failed to serialize roster: {}", e)))?;
    tokio::fs::write(path.as_ref(), json).await?;
    Ok(())
}
