use crate::config::cli::Args;
use crate::domain::Layout;
use crate::error::{BoxError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        Self::validate(&args)?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("steambox/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            "Loaded config: update option {:?}, dry run {}",
            args.update_option, args.dry_run
        );

        Ok(Self { args, http_client })
    }

    pub fn layout(&self) -> Layout {
        Layout {
            max_lines: self.args.max_lines,
            name_width: self.args.name_width,
            duration_width: self.args.duration_width,
            rank_by: self.args.rank_by.into(),
        }
    }

    /// The gist id, required whenever a gist is read or written.
    pub fn gist_id(&self) -> Result<&str> {
        self.args
            .gist_id
            .as_deref()
            .ok_or_else(|| BoxError::Config("GIST_ID is required for gist updates".to_string()))
    }

    fn validate(args: &Args) -> Result<()> {
        let option = args.update_option;
        let markdown_in_gist = option.updates_markdown() && args.markdown_file.is_none();

        if markdown_in_gist && args.markdown_gist_file.is_none() {
            return Err(BoxError::Config(
                "markdown updates need MARKDOWN_FILE or MARKDOWN_GIST_FILE".to_string(),
            ));
        }

        let touches_gist = option.updates_gist() || markdown_in_gist;
        if touches_gist && args.gist_id.is_none() {
            return Err(BoxError::Config("GIST_ID is required for gist updates".to_string()));
        }
        if touches_gist && args.gh_token.is_none() {
            return Err(BoxError::Config("GH_TOKEN is required for gist updates".to_string()));
        }

        Ok(())
    }
}
