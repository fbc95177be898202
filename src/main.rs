use crate::config::{cli::Args, Config};
use crate::error::Result;
use crate::services::box_service::BoxService;
use clap::Parser;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let config = Config::from_args(args)?;

    let steam_box = BoxService::new(&config)?;
    steam_box.run().await?;

    info!("Steam box finished");
    Ok(())
}
