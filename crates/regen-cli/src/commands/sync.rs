//! Check, sync, and diff command implementations
//!
//! These commands compare each target's generated region with what its
//! declaration renders to, and optionally rewrite the file.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use regen_core::{Mode, Outcome, Regenerator, TargetReport};
use regen_fs::RobustnessConfig;

use crate::commands::load_manifest;
use crate::error::Result;
use crate::exit::ExitKind;

/// JSON document printed by `check --json` and `sync --json`.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    command: &'a str,
    status: &'a str,
    targets: &'a [TargetReport],
}

fn run_reports(
    config: &Path,
    target: Option<&str>,
    regenerator: Regenerator,
) -> Result<Vec<TargetReport>> {
    let manifest = load_manifest(config)?;
    let targets = manifest.targets(target)?;
    Ok(regenerator.run_all(&targets)?)
}

fn exit_kind(reports: &[TargetReport]) -> ExitKind {
    if reports.iter().any(TargetReport::needs_attention) {
        ExitKind::Regenerated
    } else {
        ExitKind::Unchanged
    }
}

fn print_json(command: &str, kind: ExitKind, reports: &[TargetReport]) -> Result<()> {
    let summary = RunSummary {
        command,
        status: kind.label(),
        targets: reports,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_report_line(report: &TargetReport) {
    let (tag, marker) = match report.outcome {
        Outcome::Unchanged => ("OK".green().bold(), "=".green()),
        Outcome::Regenerated => ("REGENERATED".yellow().bold(), "+".yellow()),
        Outcome::Stale => ("STALE".red().bold(), "!".red()),
    };
    println!(
        "   {} {} {} ({} variants) {}",
        marker,
        report.name.cyan(),
        report.path.dimmed(),
        report.variants,
        tag
    );
}

/// Print a unified diff with colored +/- lines.
pub fn print_diff(unified: &str) {
    for line in unified.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}

/// Run the check command
///
/// Reports stale regions without writing anything.
pub fn run_check(config: &Path, target: Option<&str>, diff: bool, json: bool) -> Result<ExitKind> {
    let reports = run_reports(config, target, Regenerator::new(Mode::Check))?;
    let kind = exit_kind(&reports);

    if json {
        print_json("check", kind, &reports)?;
        return Ok(kind);
    }

    println!("{} Checking generated regions...", "=>".blue().bold());
    for report in &reports {
        print_report_line(report);
        if diff {
            if let Some(preview) = &report.preview {
                print_diff(&preview.unified);
            }
        }
    }

    println!();
    match kind {
        ExitKind::Unchanged => {
            println!("{} All generated regions are up to date.", "OK".green().bold());
        }
        _ => {
            println!(
                "{} Some regions are stale. Run {} to regenerate.",
                "STALE".red().bold(),
                "regen sync".cyan()
            );
        }
    }
    Ok(kind)
}

/// Run the sync command
///
/// Rewrites stale regions. Anything rewritten makes the run "fail" with
/// [`ExitKind::Regenerated`]; a second, clean run confirms stability.
pub fn run_sync(
    config: &Path,
    target: Option<&str>,
    dry_run: bool,
    json: bool,
    robustness: RobustnessConfig,
) -> Result<ExitKind> {
    let mode = if dry_run { Mode::Check } else { Mode::Apply };
    let regenerator = Regenerator::new(mode).with_robustness(robustness);
    let reports = run_reports(config, target, regenerator)?;
    let kind = exit_kind(&reports);

    if json {
        print_json("sync", kind, &reports)?;
        return Ok(kind);
    }

    let header = if dry_run {
        "Previewing generated regions..."
    } else {
        "Synchronizing generated regions..."
    };
    println!("{} {}", "=>".blue().bold(), header);
    for report in &reports {
        print_report_line(report);
    }

    println!();
    match (kind, dry_run) {
        (ExitKind::Unchanged, _) => {
            println!("{} Already synchronized. No changes needed.", "OK".green().bold());
        }
        (_, true) => {
            println!(
                "{} Dry run: stale regions were not written.",
                "DRY-RUN".yellow().bold()
            );
        }
        (_, false) => {
            println!(
                "{} Files were regenerated. Re-run to confirm they are stable.",
                "REGENERATED".yellow().bold()
            );
        }
    }
    Ok(kind)
}

/// Run the diff command
///
/// Prints the unified diff `sync` would apply. Always exits successfully.
pub fn run_diff(config: &Path, target: Option<&str>) -> Result<ExitKind> {
    let reports = run_reports(config, target, Regenerator::new(Mode::Check))?;

    let mut any = false;
    for preview in reports.iter().filter_map(|r| r.preview.as_ref()) {
        print_diff(&preview.unified);
        any = true;
    }
    if !any {
        println!("{} No differences.", "OK".green().bold());
    }
    Ok(ExitKind::Unchanged)
}
