use crate::error::{BoxError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

const GITHUB_API: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
pub struct Gist {
    pub files: HashMap<String, GistFile>,
}

#[derive(Debug, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub raw_url: Option<String>,
}

#[derive(Debug, Serialize)]
struct GistUpdate<'a> {
    files: HashMap<&'a str, GistFileUpdate<'a>>,
}

#[derive(Debug, Serialize)]
struct GistFileUpdate<'a> {
    content: &'a str,
}

#[derive(Debug, Clone)]
pub enum GithubAuth {
    Token(String),
    Basic { username: String, token: String },
}

#[derive(Clone)]
pub struct GistClient {
    client: Client,
    auth: GithubAuth,
}

impl GistClient {
    pub fn new(client: Client, auth: GithubAuth) -> Self {
        Self { client, auth }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("Accept", "application/vnd.github+json");
        match &self.auth {
            GithubAuth::Token(token) => request.bearer_auth(token.trim()),
            GithubAuth::Basic { username, token } => {
                request.basic_auth(username.trim(), Some(token.trim()))
            }
        }
    }

    pub async fn get_file(&self, gist_id: &str, filename: &str) -> Result<String> {
        let url = format!("{GITHUB_API}/gists/{gist_id}");
        let response = self.authorize(self.client.get(&url)).send().await?;
        let gist: Gist = check_status(response).await?.json().await?;

        let file = gist.files.get(filename).ok_or_else(|| BoxError::Api {
            service: "GitHub",
            status: 404,
            message: format!("file `{filename}` not found in gist {gist_id}"),
        })?;

        match (&file.content, &file.raw_url) {
            (Some(content), _) if !file.truncated => Ok(content.clone()),
            (_, Some(raw_url)) => {
                debug!("Gist file {filename} is truncated, fetching raw content");
                let response = self.authorize(self.client.get(raw_url)).send().await?;
                Ok(check_status(response).await?.text().await?)
            }
            (Some(content), None) => Ok(content.clone()),
            (None, None) => Ok(String::new()),
        }
    }

    pub async fn update_file(&self, gist_id: &str, filename: &str, content: &str) -> Result<()> {
        let url = format!("{GITHUB_API}/gists/{gist_id}");
        let body = GistUpdate {
            files: HashMap::from([(filename, GistFileUpdate { content })]),
        };

        let response = self
            .authorize(self.client.patch(&url))
            .json(&body)
            .send()
            .await?;
        check_status(response).await?;

        info!("Updated `{filename}` in gist {gist_id}");
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    Err(BoxError::Api {
        service: "GitHub",
        status: status.as_u16(),
        message: response.text().await.unwrap_or_default(),
    })
}
