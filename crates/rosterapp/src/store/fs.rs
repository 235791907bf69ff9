use super::UserStore;
use crate::error::StoreError;
use crate::model::User;
use async_trait::async_trait;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the collection as a JSON array in a single file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Writes a sibling temp file and renames it over `path`, so readers never see a
/// truncated document. The temp file is removed if anything fails before the rename.
fn replace_file(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl UserStore for FileStore {
    async fn load(&self) -> Result<Vec<User>, StoreError> {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| StoreError::Read {
                    path: self.path.clone(),
                    source,
                })?;
        let users: Vec<User> =
            serde_json::from_str(&content).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = users.len(), "loaded users");
        Ok(users)
    }

    async fn save(&self, users: &[User]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(users).map_err(StoreError::Encode)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&path, content.as_bytes()))
            .await
            .map_err(|e| self.write_error(io::Error::other(e)))?
            .map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path.display(), count = users.len(), "saved users");
        Ok(())
    }
}
