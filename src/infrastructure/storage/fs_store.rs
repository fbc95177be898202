use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A document kept as a file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    path: PathBuf,
}

impl FileSystemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<String> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes from {:?}", content.len(), self.path);
        Ok(content)
    }

    pub async fn write(&self, content: &str) -> Result<()> {
        tokio::fs::write(&self.path, content).await?;
        debug!("Wrote {} bytes to {:?}", content.len(), self.path);
        Ok(())
    }
}
