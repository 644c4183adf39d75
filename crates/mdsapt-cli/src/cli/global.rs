//! Global arguments that apply to every subcommand.
//!
//! Flattened into [`super::Cli`]; these flags are accepted before or after
//! any subcommand.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// How much of the validation pipeline to narrate on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Report validation stages (-v), checks (-vv), everything (-vvv)",
        long_help = "Report progress of the validation pipeline on stderr:
    (none)  - only warnings and the final verdict
    -v      - mode detection, structure loading, each validator stage
    -vv     - individual checks and resolved structure data
    -vvv    - everything, including adapter internals"
    )]
    pub verbose: u8,

    /// Print nothing but errors; the exit code carries the verdict.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors; rely on the exit code"
    )]
    pub quiet: bool,

    /// Plain glyphs in summaries and error reports; `NO_COLOR` sets it too.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Do not colour summaries or errors"
    )]
    pub no_color: bool,

    /// Tool settings (default manifest, output); must exist when given.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read tool settings from FILE"
    )]
    pub config: Option<PathBuf>,

    /// Also write logs as JSON lines to this file.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Write logs to a file"
    )]
    pub log_file: Option<PathBuf>,

    /// How `validate` reports a valid run; `json` prints the whole config.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Summary style: auto, human, plain or json"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parse the `output.format` config value; unknown values mean `Auto`.
    pub fn from_config(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "human" => Self::Human,
            "plain" => Self::Plain,
            "json" => Self::Json,
            _ => Self::Auto,
        }
    }
}
