use crate::config::Config;
use crate::domain::{DocumentStore, Layout};
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, GistClient, GistFileStore, GithubAuth, SteamClient};
use crate::services::splice::{markdown_title, splice, END_MARKER, START_MARKER};
use crate::services::summary::summarize;
use tracing::info;

pub struct BoxService {
    steam: SteamClient,
    steam_id: u64,
    count: u32,
    layout: Layout,
    leaderboard: Option<DocumentStore>,
    markdown: Option<DocumentStore>,
    title: String,
    dry_run: bool,
}

impl BoxService {
    pub fn new(config: &Config) -> Result<Self> {
        let args = &config.args;
        let steam = SteamClient::new(config.http_client.clone(), args.steam_api_key.clone());

        let gist_client = args.gh_token.as_ref().map(|token| {
            let auth = match &args.gh_username {
                Some(username) => GithubAuth::Basic {
                    username: username.clone(),
                    token: token.clone(),
                },
                None => GithubAuth::Token(token.clone()),
            };
            GistClient::new(config.http_client.clone(), auth)
        });

        let leaderboard = match &gist_client {
            Some(client) if args.update_option.updates_gist() => {
                let gist_id = config.gist_id()?;
                let store = GistFileStore::new(client.clone(), gist_id, &args.gist_filename);
                Some(DocumentStore::Gist(store))
            }
            _ => None,
        };

        let markdown = if !args.update_option.updates_markdown() {
            None
        } else if let Some(path) = &args.markdown_file {
            Some(DocumentStore::File(FileSystemStore::new(path.clone())))
        } else {
            match (&gist_client, &args.markdown_gist_file) {
                (Some(client), Some(filename)) => {
                    let gist_id = config.gist_id()?;
                    let store = GistFileStore::new(client.clone(), gist_id, filename.clone());
                    Some(DocumentStore::Gist(store))
                }
                _ => None,
            }
        };

        let title = match &args.gist_id {
            Some(gist_id) => markdown_title(gist_id, &args.gist_filename),
            None => format!("#### {}", args.gist_filename),
        };

        Ok(Self {
            steam,
            steam_id: args.steam_id,
            count: args.count,
            layout: config.layout(),
            leaderboard,
            markdown,
            title,
            dry_run: args.dry_run,
        })
    }

    pub async fn run(&self) -> Result<()> {
        info!("Starting steam box update");

        let records = self
            .steam
            .get_recent_playtime(self.steam_id, self.count)
            .await?;

        let lines = summarize(&records, &self.layout);
        info!("Rendered {} leaderboard lines", lines.len());

        publish(
            self.leaderboard.as_ref(),
            self.markdown.as_ref(),
            &self.title,
            &lines,
            self.dry_run,
        )
        .await?;

        info!("Steam box update completed");
        Ok(())
    }
}

/// Writes the leaderboard and the markdown section.
///
/// The markdown document is loaded and spliced before anything is saved, so a
/// missing or misplaced marker leaves both documents untouched.
pub async fn publish(
    leaderboard: Option<&DocumentStore>,
    markdown: Option<&DocumentStore>,
    title: &str,
    lines: &[String],
    dry_run: bool,
) -> Result<()> {
    let spliced = match markdown {
        Some(store) => splice_document(store, title, lines).await?,
        None => None,
    };

    if let Some(store) = leaderboard {
        write_leaderboard(store, lines, dry_run).await?;
    }

    if let (Some(store), Some(updated)) = (markdown, spliced) {
        if dry_run {
            info!("Dry run, updated document for {store}:\n{updated}");
        } else {
            store.save(&updated).await?;
            info!("Markdown section updated in {store}");
        }
    }

    Ok(())
}

/// Overwrites the whole leaderboard document with `lines`.
pub async fn write_leaderboard(
    store: &DocumentStore,
    lines: &[String],
    dry_run: bool,
) -> Result<()> {
    let content = lines.join("\n");
    if dry_run {
        info!("Dry run, leaderboard for {store}:\n{content}");
        return Ok(());
    }

    store.save(&content).await?;
    info!("Leaderboard written to {store}");
    Ok(())
}

/// Returns the document with `lines` spliced in, or `None` if it already
/// holds exactly that section.
async fn splice_document(
    store: &DocumentStore,
    title: &str,
    lines: &[String],
) -> Result<Option<String>> {
    let document = store.load().await?;
    let updated = splice(&document, START_MARKER, END_MARKER, title, lines)?;

    if updated == document {
        info!("{store} already up to date");
        return Ok(None);
    }
    Ok(Some(updated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::Args;
    use crate::error::BoxError;
    use clap::Parser;
    use tempfile::tempdir;

    const README: &str =
        "# Hi\n\n<!-- steam-box start -->\nstale\n<!-- steam-box end -->\n\nfooter\n";
    const LEADERBOARD: &str = "🎮 Steam playtime leaderboard";

    fn file_store(dir: &std::path::Path, name: &str, content: &str) -> DocumentStore {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        DocumentStore::File(FileSystemStore::new(path))
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn build_service(extra: &[&str]) -> BoxService {
        let mut argv = vec!["steambox", "--steam-api-key", "key", "--steam-id", "1"];
        argv.extend_from_slice(extra);
        let config = Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap();
        BoxService::new(&config).unwrap()
    }

    fn describe(store: &Option<DocumentStore>) -> Option<String> {
        store.as_ref().map(ToString::to_string)
    }

    #[tokio::test]
    async fn updates_marked_section_of_local_file() -> Result<()> {
        let dir = tempdir()?;
        let store = file_store(dir.path(), "README.md", README);

        let body = lines(&["one", "two"]);
        publish(None, Some(&store), "#### Played", &body, false).await?;

        let content = store.load().await?;
        assert!(content.starts_with("# Hi\n\n<!-- steam-box start -->\n#### Played\n```text\n"));
        assert!(content.contains("one\ntwo\n```\n"));
        assert!(content.ends_with("<!-- steam-box end -->\n\nfooter\n"));
        assert!(!content.contains("stale"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_markers_leave_file_untouched() -> Result<()> {
        let dir = tempdir()?;
        let original = "# Hi\nno markers here\n";
        let store = file_store(dir.path(), "README.md", original);

        let err = publish(None, Some(&store), "T", &lines(&["x"]), false)
            .await
            .unwrap_err();

        assert!(matches!(err, BoxError::MarkerNotFound { .. }));
        assert_eq!(store.load().await?, original);
        Ok(())
    }

    #[tokio::test]
    async fn failed_splice_does_not_touch_leaderboard() -> Result<()> {
        let dir = tempdir()?;
        let board = file_store(dir.path(), "board.txt", "old board\n");
        let readme = file_store(dir.path(), "README.md", "<!-- steam-box end -->\n");

        let err = publish(Some(&board), Some(&readme), "T", &lines(&["x"]), false)
            .await
            .unwrap_err();

        assert!(matches!(err, BoxError::MarkerNotFound { .. }));
        assert_eq!(board.load().await?, "old board\n");
        assert_eq!(readme.load().await?, "<!-- steam-box end -->\n");
        Ok(())
    }

    #[tokio::test]
    async fn writes_leaderboard_and_markdown_together() -> Result<()> {
        let dir = tempdir()?;
        let board = file_store(dir.path(), "board.txt", "old board\n");
        let readme = file_store(dir.path(), "README.md", README);

        let body = lines(&["a", "b"]);
        publish(Some(&board), Some(&readme), "T", &body, false).await?;

        assert_eq!(board.load().await?, "a\nb");
        assert!(readme.load().await?.contains("```text\na\nb\n```\n"));
        Ok(())
    }

    #[tokio::test]
    async fn dry_run_does_not_write() -> Result<()> {
        let dir = tempdir()?;
        let board = file_store(dir.path(), "board.txt", "old board\n");
        let readme = file_store(dir.path(), "README.md", README);

        publish(Some(&board), Some(&readme), "T", &lines(&["x"]), true).await?;

        assert_eq!(board.load().await?, "old board\n");
        assert_eq!(readme.load().await?, README);
        Ok(())
    }

    #[tokio::test]
    async fn leaderboard_replaces_whole_document() -> Result<()> {
        let dir = tempdir()?;
        let store = file_store(dir.path(), "board.txt", "old board\n");

        write_leaderboard(&store, &lines(&["first", "second"]), false).await?;

        assert_eq!(store.load().await?, "first\nsecond");
        Ok(())
    }

    #[test]
    fn gist_option_targets_leaderboard_file() {
        let service = build_service(&["--gist-id", "abc", "--gh-token", "t"]);

        let expected = format!("gist abc/{LEADERBOARD}");
        assert_eq!(describe(&service.leaderboard), Some(expected));
        assert!(service.markdown.is_none());
        assert_eq!(service.title, markdown_title("abc", LEADERBOARD));
    }

    #[test]
    fn local_markdown_without_gist() {
        let service = build_service(&[
            "--update-option",
            "markdown",
            "--markdown-file",
            "README.md",
        ]);

        assert!(service.leaderboard.is_none());
        assert_eq!(
            describe(&service.markdown),
            Some("file README.md".to_string())
        );
        assert_eq!(service.title, format!("#### {LEADERBOARD}"));
    }

    #[test]
    fn markdown_falls_back_to_gist_file() {
        let service = build_service(&[
            "--update-option",
            "gist-and-markdown",
            "--gist-id",
            "abc",
            "--gh-token",
            "t",
            "--markdown-gist-file",
            "README.md",
        ]);

        assert!(service.leaderboard.is_some());
        assert_eq!(
            describe(&service.markdown),
            Some("gist abc/README.md".to_string())
        );
    }
}
