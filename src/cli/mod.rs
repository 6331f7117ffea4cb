pub mod output;

use clap::Parser;
use clap::builder::{BoolishValueParser, FalseyValueParser};
use epub_build::executor::{ExitPolicy, SpawnMode};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "epub-build",
    version,
    about = "Merge the book's HTML fragments into main.epub with pandoc"
)]
pub struct Cli {
    /// Print the command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Run the command through the platform shell instead of spawning pandoc directly
    #[arg(long)]
    pub shell: bool,

    /// Exit successfully even when pandoc fails
    #[arg(long, env = "EPUB_BUILD_IGNORE_STATUS", value_parser = BoolishValueParser::new())]
    pub ignore_status: bool,

    /// Directory to run pandoc in
    #[arg(short = 'C', long, env = "EPUB_BUILD_DIR")]
    pub directory: Option<PathBuf>,

    /// Output the command plan as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,
}

impl Cli {
    pub fn spawn_mode(&self) -> SpawnMode {
        if self.shell {
            SpawnMode::Shell
        } else {
            SpawnMode::Direct
        }
    }

    pub fn exit_policy(&self) -> ExitPolicy {
        if self.ignore_status {
            ExitPolicy::Ignore
        } else {
            ExitPolicy::Propagate
        }
    }
}
