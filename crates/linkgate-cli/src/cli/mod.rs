//! CLI for the linkgate URL shortener.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkgate_core::config::{self, LinkgateConfig};
use linkgate_core::link_db::LinkDb;
use linkgate_core::shortener::Shortener;
use std::path::PathBuf;

use commands::{run_check, run_list, run_resolve, run_shorten};

/// Top-level CLI for linkgate.
#[derive(Debug, Parser)]
#[command(name = "linkgate")]
#[command(about = "linkgate: URL validation gate and short-link allocator", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/linkgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run a URL through the validation gate without storing it.
    Check {
        /// URL as a user would submit it.
        url: String,
        /// Print the full verdict as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate a URL and print its short code and share links.
    Shorten {
        url: String,
    },

    /// Print the address stored for a short code.
    Resolve {
        /// 9-character short code.
        code: String,
    },

    /// List all stored links, newest first.
    List,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(&cli)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { url, json } => run_check(&cfg, &url, json)?,
            CliCommand::Shorten { url } => {
                let shortener = open_shortener(&cfg).await?;
                run_shorten(&shortener, &url).await?;
            }
            CliCommand::Resolve { code } => {
                let shortener = open_shortener(&cfg).await?;
                run_resolve(&shortener, &code).await?;
            }
            CliCommand::List => {
                let db = LinkDb::open(&cfg).await?;
                run_list(&db).await?;
            }
        }

        Ok(())
    }
}

fn load_config(cli: &Cli) -> Result<LinkgateConfig> {
    match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

async fn open_shortener(cfg: &LinkgateConfig) -> Result<Shortener<LinkDb>> {
    let db = LinkDb::open(cfg).await?;
    Ok(Shortener::new(db, cfg))
}

#[cfg(test)]
mod tests;
