//! List and variants command implementations

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use regen_core::{Mode, Regenerator};

use crate::commands::load_manifest;
use crate::error::{CliError, Result};
use crate::exit::ExitKind;

#[derive(Debug, Serialize)]
struct TargetEntry<'a> {
    name: &'a str,
    path: String,
    declared_in: String,
    template: &'a str,
}

/// Run the list command
pub fn run_list(config: &Path, json: bool) -> Result<ExitKind> {
    let manifest = load_manifest(config)?;
    let targets = manifest.targets(None)?;

    let entries: Vec<TargetEntry<'_>> = manifest
        .targets
        .iter()
        .zip(&targets)
        .map(|(spec, target)| TargetEntry {
            name: &spec.name,
            path: target.path().to_string(),
            declared_in: target.declaration_path().to_string(),
            template: &spec.template,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitKind::Unchanged);
    }

    if entries.is_empty() {
        println!("No targets configured in {}.", config.display().to_string().cyan());
        return Ok(ExitKind::Unchanged);
    }

    println!("{} Configured targets:", "=>".blue().bold());
    for entry in &entries {
        println!("   {} {} {}", "-".green(), entry.name.cyan(), entry.path.dimmed());
        if entry.declared_in != entry.path {
            println!("     declared in {}", entry.declared_in.dimmed());
        }
    }
    Ok(ExitKind::Unchanged)
}

/// Run the variants command
///
/// Prints the declaration as the generator sees it: index, name, line.
pub fn run_variants(config: &Path, name: &str, json: bool) -> Result<ExitKind> {
    let manifest = load_manifest(config)?;
    let target = manifest
        .targets(Some(name))?
        .into_iter()
        .next()
        .ok_or_else(|| CliError::user(format!("Target '{}' not found", name)))?;

    let plan = Regenerator::new(Mode::Check).plan(&target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan.variants)?);
        return Ok(ExitKind::Unchanged);
    }

    println!(
        "{} Variants of {} ({}):",
        "=>".blue().bold(),
        target.name().cyan(),
        target.declaration_path().to_string().dimmed()
    );
    for variant in &plan.variants {
        println!(
            "   {:>4}  {}  {}",
            variant.index.to_string().bold(),
            variant.name,
            format!("line {}", variant.line).dimmed()
        );
    }
    Ok(ExitKind::Unchanged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regen_test_utils::TestProject;

    #[test]
    fn list_and_variants_on_fixture() {
        let project = TestProject::new();
        project.write_container(&["A", "B", "C"], "");
        project.write_manifest();
        let config = project.path("regen.toml");

        assert_eq!(run_list(&config, false).unwrap(), ExitKind::Unchanged);
        assert_eq!(run_variants(&config, "container", true).unwrap(), ExitKind::Unchanged);
    }

    #[test]
    fn variants_of_unknown_target_fails() {
        let project = TestProject::new();
        project.write_manifest();
        let result = run_variants(&project.path("regen.toml"), "nope", false);
        assert!(matches!(result, Err(CliError::Core(_))));
    }
}
