use crate::error::Result;
use crate::infrastructure::GistClient;

/// A single named file inside a gist.
#[derive(Clone)]
pub struct GistFileStore {
    client: GistClient,
    gist_id: String,
    filename: String,
}

impl GistFileStore {
    pub fn new(
        client: GistClient,
        gist_id: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            client,
            gist_id: gist_id.into(),
            filename: filename.into(),
        }
    }

    pub fn gist_id(&self) -> &str {
        &self.gist_id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub async fn read(&self) -> Result<String> {
        self.client.get_file(&self.gist_id, &self.filename).await
    }

    pub async fn write(&self, content: &str) -> Result<()> {
        self.client
            .update_file(&self.gist_id, &self.filename, content)
            .await
    }
}
