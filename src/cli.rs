//! Command-line argument parsing for echo-plugins

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// echo-plugins - inspect the sub-agents available to the Echo host
#[derive(Parser, Debug)]
#[command(name = "echo-plugins")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What to inspect
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List active agents (default)
    List,
    /// Show one agent's system prompt and tools
    Show {
        /// Plugin identity
        #[arg(value_name = "NAME")]
        name: String,
    },
}
