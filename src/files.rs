//! Text file helpers for native project files.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a text file, returning `None` if it does not exist.
pub async fn read_optional(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Writes a text file, creating parent directories as needed.
pub async fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| Error::io(path, e))
}
