use clap::Parser;
use std::path::PathBuf;

use super::types::{OperationArg, PreviewArg};

/// Reorganize pension record PDF trees by PEN identifier
///
/// Run without arguments for the interactive session: enter a root directory,
/// pick an operation, review the plan, then confirm.
#[derive(Parser, Debug)]
#[command(name = "pensort")]
#[command(author, version, about)]
pub struct Cli {
    /// Root directory of the PDF tree (prompted for when omitted)
    pub root: Option<PathBuf>,

    /// Operation to run instead of choosing from the menu
    #[arg(short, long, value_enum)]
    pub operation: Option<OperationArg>,

    /// Answer yes to the confirmation prompt
    #[arg(short = 'y', long = "yes", conflicts_with = "dry_run")]
    pub yes: bool,

    /// Show the plan and stop without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Preview format (defaults to the configured format, then "list")
    #[arg(long, value_enum)]
    pub preview: Option<PreviewArg>,

    /// Disable colored output (a non-empty NO_COLOR does the same)
    #[arg(long)]
    pub no_color: bool,

    /// Accept `_PEN` suffixes that are not exactly 12 digits when normalizing filenames
    #[arg(long)]
    pub permissive: bool,
}
