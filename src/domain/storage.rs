use crate::error::Result;
use crate::infrastructure::{FileSystemStore, GistFileStore};
use std::fmt;

/// Where a document lives. Reads return the whole body and writes replace it.
#[derive(Clone)]
pub enum DocumentStore {
    File(FileSystemStore),
    Gist(GistFileStore),
}

impl DocumentStore {
    pub async fn load(&self) -> Result<String> {
        match self {
            Self::File(store) => store.read().await,
            Self::Gist(store) => store.read().await,
        }
    }

    pub async fn save(&self, content: &str) -> Result<()> {
        match self {
            Self::File(store) => store.write(content).await,
            Self::Gist(store) => store.write(content).await,
        }
    }
}

impl fmt::Display for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(store) => write!(f, "file {}", store.path().display()),
            Self::Gist(store) => write!(f, "gist {}/{}", store.gist_id(), store.filename()),
        }
    }
}
