//! Command-line interface for libcat.
//!
//! Starts the interactive catalog session, or prints the resolved
//! configuration.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, ResolvedConfig};

pub mod prompt;
pub mod session;

pub use prompt::{LineSource, Prompt, Prompter, ScriptedSource, StdinSource};
pub use session::{Outcome, Session};

/// libcat - Interactive library catalog for books, DVDs and magazines
#[derive(Parser, Debug)]
#[command(name = "libcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input that cancels the current prompt (default "-1")
    #[arg(long, global = true)]
    pub cancel_token: Option<String>,

    /// Do not print identifier suggestions when adding items
    #[arg(long, global = true)]
    pub no_suggest: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive session (default)
    Run,

    /// Show resolved configuration
    Config {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cfg = config::config()?
            .clone()
            .with_overrides(self.cancel_token, self.no_suggest)?;

        match self.command.unwrap_or(Commands::Run) {
            Commands::Run => run_session(&cfg).await,
            Commands::Config { json } => show_config(&cfg, json),
        }
    }
}

/// Run an interactive session on stdin/stdout
async fn run_session(cfg: &ResolvedConfig) -> Result<()> {
    let mut session = Session::new(StdinSource::new(), io::stdout(), cfg);
    session.run().await
}

/// Show the resolved configuration
fn show_config(cfg: &ResolvedConfig, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(cfg).context("Failed to serialize configuration")?;
        println!("{}", rendered);
        return Ok(());
    }

    println!(
        "Config file:  {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Cancel token: {}", cfg.cancel_token);
    println!("Suggest IDs:  {}", cfg.suggest_ids);

    Ok(())
}
