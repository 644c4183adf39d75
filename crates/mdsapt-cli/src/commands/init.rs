//! `mdsapt init`: write a run-input template.

use std::fs;

use mdsapt_core::domain::Mode;

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const TRAJECTORY_TEMPLATE: &str = "\
# MD-SAPT run input: trajectory mode
topology_path: system.pdb
trajectory_paths:
  - production.dcd

# Residues to analyse, and which of them interact
selection_resid_num: [10, 20]
int_pairs:
  - [10, 20]

trajectory_settings:
  start: 0
  stop: 100
  step: 10

system_settings:
  ncpus: 8
  memory: 16GB
  time: '24:00:00'

opt_settings:
  pH: 7.0

sapt_settings:
  method: sapt0
  basis: jun-cc-pvdz
  settings:
    reference: rhf
  save_psi4_output: true
";

const DOCKING_TEMPLATE: &str = "\
# MD-SAPT run input: docking mode
topology_directory:
  - pose1.pdb
  - pose2.pdb

# Residues to analyse, and which of them interact
selection_resid_num: [10, 20]
int_pairs:
  - [10, 20]

system_settings:
  ncpus: 8
  memory: 16GB
  time: '24:00:00'

opt_settings:
  pH: 7.0

sapt_settings:
  method: sapt0
  basis: jun-cc-pvdz
  settings:
    reference: rhf
  save_psi4_output: true
";

pub(crate) const fn template(mode: Mode) -> &'static str {
    match mode {
        Mode::Trajectory => TRAJECTORY_TEMPLATE,
        Mode::Docking => DOCKING_TEMPLATE,
    }
}

/// Write the template for the requested mode.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let mode = Mode::from(args.mode);

    if args.path.exists() {
        if !args.force {
            return Err(CliError::FileExists { path: args.path });
        }
        output.warning(&format!("Overwriting {}", args.path.display()))?;
    }

    if let Some(parent) = args.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(&args.path, template(mode))
        .with_cli_context(|| format!("Failed to write template to '{}'", args.path.display()))?;

    tracing::info!(path = %args.path.display(), %mode, "Template written");
    output.success(&format!(
        "Wrote {mode} run input to {}",
        args.path.display()
    ))?;
    output.print("Edit the structure paths and residue ids, then run `mdsapt validate`.")?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use mdsapt_adapters::YamlDocumentLoader;
    use mdsapt_core::domain::{
        ComputeSettingsValidator, DockingDocument, ModeDetector, SystemSettingsValidator,
        TrajectoryDocument,
    };

    use super::*;

    #[test]
    fn trajectory_template_is_complete() {
        let raw = YamlDocumentLoader::parse_str(template(Mode::Trajectory)).unwrap();
        assert_eq!(ModeDetector::detect(&raw).unwrap(), Mode::Trajectory);

        let doc = TrajectoryDocument::extract(&raw).unwrap();
        assert_eq!(doc.pairs.len(), 1);
        SystemSettingsValidator::validate(&doc.system_settings).unwrap();
        ComputeSettingsValidator::validate(&doc.opt_settings, &doc.sapt_settings).unwrap();
    }

    #[test]
    fn docking_template_is_complete() {
        let raw = YamlDocumentLoader::parse_str(template(Mode::Docking)).unwrap();
        assert_eq!(ModeDetector::detect(&raw).unwrap(), Mode::Docking);

        let doc = DockingDocument::extract(&raw).unwrap();
        assert_eq!(doc.structures.len(), 2);
        SystemSettingsValidator::validate(&doc.system_settings).unwrap();
        ComputeSettingsValidator::validate(&doc.opt_settings, &doc.sapt_settings).unwrap();
    }
}
