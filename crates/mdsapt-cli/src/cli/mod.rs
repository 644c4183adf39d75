//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No validation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mdsapt_core::domain::Mode;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mdsapt",
    bin_name = "mdsapt",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate MD-SAPT run inputs before scheduling calculations",
    long_about = "mdsapt checks a run-input document against the structure data it \
                  references and reports every problem it finds, before any SAPT \
                  calculation is queued.",
    after_help = "EXAMPLES:\n\
        \x20 mdsapt init run.yaml --mode trajectory\n\
        \x20 mdsapt validate run.yaml --structures structures.toml\n\
        \x20 mdsapt validate dock.yaml --structures structures.toml --check-files\n\
        \x20 mdsapt completions bash > /usr/share/bash-completion/completions/mdsapt",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a run-input document.
    #[command(
        visible_alias = "check",
        about = "Validate a run input",
        after_help = "EXAMPLES:\n\
            \x20 mdsapt validate run.yaml --structures structures.toml\n\
            \x20 mdsapt validate run.yaml --output-format json"
    )]
    Validate(ValidateArgs),

    /// Write a run-input template.
    #[command(
        about = "Create a run-input template",
        after_help = "EXAMPLES:\n\
            \x20 mdsapt init run.yaml\n\
            \x20 mdsapt init dock.yaml --mode docking\n\
            \x20 mdsapt init run.yaml --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mdsapt completions bash > ~/.local/share/bash-completion/completions/mdsapt\n\
            \x20 mdsapt completions zsh  > ~/.zfunc/_mdsapt\n\
            \x20 mdsapt completions fish > ~/.config/fish/completions/mdsapt.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the tool configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mdsapt config get validation.check_files\n\
            \x20 mdsapt config list\n\
            \x20 mdsapt config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `mdsapt validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Run-input YAML document.
    #[arg(value_name = "INPUT", help = "Run-input file to validate")]
    pub input: PathBuf,

    /// TOML manifest describing the referenced structures.
    ///
    /// Falls back to `validation.structure_manifest` from the configuration.
    #[arg(
        short = 's',
        long = "structures",
        value_name = "MANIFEST",
        help = "Structure manifest (TOML)"
    )]
    pub structures: Option<PathBuf>,

    /// Require every referenced structure file to exist on disk.
    ///
    /// Relative paths are resolved against the directory of INPUT.
    #[arg(long = "check-files", help = "Check structure files exist")]
    pub check_files: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `mdsapt init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the template.
    #[arg(value_name = "PATH", help = "Output file")]
    pub path: PathBuf,

    /// Which kind of run the template describes.
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value = "trajectory",
        help = "Run mode"
    )]
    pub mode: ModeArg,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing file")]
    pub force: bool,
}

/// Run mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ModeArg {
    /// Also accepted as `md`.
    #[value(alias = "md")]
    Trajectory,
    /// Also accepted as `dock`.
    #[value(alias = "dock")]
    Docking,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Trajectory => Mode::Trajectory,
            ModeArg::Docking => Mode::Docking,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mdsapt completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `mdsapt config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value.
    Get {
        /// Dotted key, e.g. `output.format`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the default configuration file location.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
