use crate::domain::RankBy;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Steam Web API key
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    pub steam_api_key: String,

    /// 64-bit Steam ID of the player
    #[arg(long, env = "STEAM_ID")]
    pub steam_id: u64,

    /// GitHub token with the gist scope
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    pub gh_token: Option<String>,

    /// GitHub username, switches to basic auth when set
    #[arg(long, env = "GH_USER")]
    pub gh_username: Option<String>,

    /// Gist holding the leaderboard (and optionally the markdown document)
    #[arg(long, env = "GIST_ID")]
    pub gist_id: Option<String>,

    /// Which documents to update
    #[arg(long, env = "UPDATE_OPTION", value_enum, default_value_t = UpdateOption::Gist)]
    pub update_option: UpdateOption,

    /// Local markdown file containing the steam-box markers
    #[arg(long, env = "MARKDOWN_FILE")]
    pub markdown_file: Option<PathBuf>,

    /// File inside the gist used as markdown document when no local file is given
    #[arg(long, env = "MARKDOWN_GIST_FILE")]
    pub markdown_gist_file: Option<String>,

    /// Name of the leaderboard file inside the gist
    #[arg(long, default_value = "🎮 Steam playtime leaderboard")]
    pub gist_filename: String,

    /// Number of recently played games requested from Steam
    #[arg(long, default_value_t = 5)]
    pub count: u32,

    /// Maximum number of lines in the leaderboard
    #[arg(long, default_value_t = 3)]
    pub max_lines: usize,

    /// Padded width of the name column, in characters
    #[arg(long, default_value_t = 35)]
    pub name_width: usize,

    /// Padded width of the duration column, in characters
    #[arg(long, default_value_t = 16)]
    pub duration_width: usize,

    /// Playtime field used to rank games
    #[arg(long, value_enum, default_value_t = RankOrder::Total)]
    pub rank_by: RankOrder,

    /// Log the rendered documents instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_parser = clap::value_parser!(Level))]
    pub log_level: Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UpdateOption {
    #[value(alias = "GIST")]
    Gist,
    #[value(alias = "MARKDOWN")]
    Markdown,
    #[value(alias = "GIST_AND_MARKDOWN")]
    GistAndMarkdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankOrder {
    /// All-time playtime
    Total,
    /// Playtime in the last two weeks
    Recent,
}

impl From<RankOrder> for RankBy {
    fn from(order: RankOrder) -> Self {
        match order {
            RankOrder::Total => RankBy::Total,
            RankOrder::Recent => RankBy::Recent,
        }
    }
}

impl UpdateOption {
    pub fn updates_gist(self) -> bool {
        matches!(self, Self::Gist | Self::GistAndMarkdown)
    }

    pub fn updates_markdown(self) -> bool {
        matches!(self, Self::Markdown | Self::GistAndMarkdown)
    }
}
