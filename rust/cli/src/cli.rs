//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pokerview_engine::layout::LayoutKind;

#[derive(Parser, Debug)]
#[command(
    name = "pokerview",
    version,
    about = "Poker table image compositor",
    propagate_version = true
)]
pub struct PokerviewCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a table description to a JPEG image
    Render {
        /// Table description (.json or .toml)
        #[arg(long)]
        table: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// six or eight
        #[arg(long)]
        layout: Option<LayoutKind>,
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Render the community cards to a PNG image
    Desk {
        /// Revealed cards, e.g. "As Kd 7h"; unrevealed slots stay blank
        #[arg(long, default_value = "")]
        cards: String,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Print seat and community card coordinates as JSON
    Layout {
        #[arg(long)]
        layout: Option<LayoutKind>,
    },
    /// Render a table and deliver it to a chat through the file outbox
    Post {
        #[arg(long, allow_negative_numbers = true)]
        chat: i64,
        #[arg(long)]
        table: PathBuf,
        #[arg(long)]
        layout: Option<LayoutKind>,
        #[arg(long)]
        assets: Option<PathBuf>,
        #[arg(long)]
        outbox: Option<PathBuf>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
    /// Check assets and outbox directory
    Doctor,
}

pub const COMMANDS: &[&str] = &["render", "desk", "layout", "post", "cfg", "doctor"];
