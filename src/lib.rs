#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod relay;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use analysis::grade_worksheet;
pub use app::App;
pub use domain::Pair;
pub use models::{Grade, SetupClass, StoryRegistry, Worksheet, WorksheetUpdate};

// CLI argument parsing
use {
    clap::{Parser, Subcommand},
    data::ExportFormat,
    domain::{AnchorTimeframe, Correlation, Story},
    std::path::PathBuf,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Grade a trade setup from its demand and swoop quality", long_about = None)]
pub struct Cli {
    /// Directory holding the worksheet and story book state files
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the worksheet, its grade and the management plan (default)
    Show,
    /// Set one worksheet field, e.g. `set demand.breach ok` or `set pair EURUSD`
    Set { field: String, value: String },
    /// Edit the HTF story entry for a pair
    Story {
        pair: Pair,
        #[arg(long)]
        anchor: Option<AnchorTimeframe>,
        #[arg(long)]
        story: Option<Story>,
        #[arg(long)]
        correlation: Option<Correlation>,
    },
    /// List the HTF story book
    Stories,
    /// Write the graded snapshot to a file
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output directory (defaults to ./exports)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Send the graded snapshot to the configured journal endpoint
    Send,
    /// Restore the worksheet defaults
    Reset {
        /// Also restore every story book entry
        #[arg(long, default_value_t = false)]
        stories: bool,
    },
}
