// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::{OutputFormat, OutputMode};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "panel_order",
    version = crate::VERSION,
    about = "Groups, sorts and totals panel orders written as `quantity @ length`",
    after_help = "Example input:\n  5 @ 12'6\"\n  2 @ 150\"\n  3 @ 10'",
    group(
        clap::ArgGroup::new("input_source")
            .args(["file", "entry"])
            .multiple(false)
    )
)]
pub struct Args {
    /// Order file, one `quantity @ length` per line (`-` or omitted reads stdin)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Order line given inline (repeatable)
    #[arg(short, long, value_name = "LINE")]
    pub entry: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help_heading = "Output")]
    pub format: OutputFormat,

    /// Parts of the report to emit
    #[arg(long, value_enum, default_value_t = OutputMode::Full, help_heading = "Output")]
    pub mode: OutputMode,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
}
