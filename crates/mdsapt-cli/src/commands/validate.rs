//! `mdsapt validate`: check a run input against its structures.

use std::path::{Path, PathBuf};

use mdsapt_adapters::{FileCheckingProvider, StructureManifest, YamlDocumentLoader};
use mdsapt_core::{
    application::{InputReader, StructureProvider},
    domain::ValidatedConfig,
};
use tracing::{debug, instrument};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifest = resolve_manifest(&args, &config)?;
    let check_files = args.check_files || config.validation.check_files;
    debug!(manifest = %manifest.display(), check_files, "Resolved structure data");

    let provider = StructureManifest::load(&manifest)?.into_provider();
    let provider: Box<dyn StructureProvider> = if check_files {
        Box::new(FileCheckingProvider::new(provider).with_base(input_dir(&args.input)))
    } else {
        Box::new(provider)
    };

    let reader = InputReader::new(Box::new(YamlDocumentLoader::new()), provider);
    let validated = reader.read(&args.input)?;

    match output.format() {
        OutputFormat::Json => output.json(&validated)?,
        _ => print_summary(&output, &args.input, &validated)?,
    }
    Ok(())
}

/// `--structures` wins over `validation.structure_manifest`.
fn resolve_manifest(args: &ValidateArgs, config: &AppConfig) -> CliResult<PathBuf> {
    args.structures
        .clone()
        .or_else(|| config.validation.structure_manifest.clone())
        .ok_or(CliError::NoManifest)
}

fn input_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn print_summary(output: &OutputManager, input: &Path, config: &ValidatedConfig) -> CliResult<()> {
    output.success(&format!("{} is a valid {} run input", input.display(), config.mode()))?;

    let structures: Vec<String> = config
        .structure_paths()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let selections: Vec<String> = config.selections().iter().map(ToString::to_string).collect();
    let pairs: Vec<String> = config.pairs().iter().map(ToString::to_string).collect();

    output.field("structures", &structures.join(", "))?;
    output.field("selections", &selections.join(", "))?;
    if pairs.is_empty() {
        output.field("pairs", "(none)")?;
    } else {
        output.field("pairs", &pairs.join(", "))?;
    }
    if let Some(window) = config.trajectory_window() {
        output.field(
            "frames",
            &format!(
                "{}..{} step {} ({} sampled)",
                window.start(),
                window.stop(),
                window.step(),
                window.sampled_frames()
            ),
        )?;
    }

    let resources = config.resources();
    output.field(
        "resources",
        &format!(
            "{} cpus, {} memory, {} walltime",
            resources.ncpus(),
            resources.memory(),
            resources.walltime()
        ),
    )?;

    let compute = config.compute();
    output.field("method", &format!("{}/{}", compute.method(), compute.basis()))?;
    output.field("pH", &compute.ph().to_string())?;
    Ok(())
}
