//! In-place regeneration of a generated region.
//!
//! One run is: read the file, split out the declaration block, extract the
//! variants, render the region, splice it between the region markers of the
//! *original* text, and compare. The file is written only when the candidate
//! differs byte-for-byte, and then in full.

use serde::Serialize;

use regen_fs::{NormalizedPath, RobustnessConfig, checksum, io};

use crate::render::render_region;
use crate::report::{Preview, TargetReport};
use crate::target::Target;
use crate::variant::{Variant, extract_variants};
use crate::{Error, Result, Role};

/// Whether a run may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Rewrite stale files.
    #[default]
    Apply,
    /// Report stale files without touching them.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The region already matched; nothing was written.
    Unchanged,
    /// The file was rewritten.
    Regenerated,
    /// The file is out of date; nothing was written.
    Stale,
}

/// The computed result of a run before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub original: String,
    pub candidate: String,
    pub variants: Vec<Variant>,
}

impl Plan {
    pub fn is_current(&self) -> bool {
        self.original == self.candidate
    }
}

/// Compute the regenerated text for `source` without any I/O.
///
/// `declaration_source` is the text of the declaring file when it is not
/// `source` itself.
pub fn plan_text(source: &str, declaration_source: Option<&str>, target: &Target) -> Result<Plan> {
    let declaring_text = declaration_source.unwrap_or(source);

    let declaration = target
        .declaration()
        .split(declaring_text)
        .map_err(|e| Error::marker(Role::Declaration, target.declaration_path().to_native(), e))?;

    let first_line = declaration.start_line + declaration.start_marker.matches('\n').count();
    let variants = extract_variants(declaration.inner, first_line, target.options())?;
    let rendered = render_region(target.renderer(), &variants);

    let region = target
        .region()
        .split(source)
        .map_err(|e| Error::marker(Role::Region, target.path().to_native(), e))?;

    if declaration_source.is_none() && declaration.overlaps(&region) {
        return Err(Error::Overlap {
            path: target.path().to_native(),
        });
    }

    let candidate = region.replace_inner(&rendered);
    if !reads_back(&candidate, &rendered, &variants, declaration_source.is_none(), target) {
        return Err(Error::Unstable {
            name: target.name().to_string(),
            path: target.path().to_native(),
        });
    }

    Ok(Plan {
        original: source.to_string(),
        candidate,
        variants,
    })
}

/// Whether splitting `candidate` again yields exactly `rendered` as the
/// region and, for a self-contained file, the same variant names.
fn reads_back(
    candidate: &str,
    rendered: &str,
    variants: &[Variant],
    self_contained: bool,
    target: &Target,
) -> bool {
    let region_ok = target
        .region()
        .split(candidate)
        .is_ok_and(|split| split.inner == rendered);
    if !region_ok || !self_contained {
        return region_ok;
    }

    target
        .declaration()
        .split(candidate)
        .ok()
        .and_then(|split| extract_variants(split.inner, 1, target.options()).ok())
        .is_some_and(|again| {
            again
                .iter()
                .map(|v| &v.name)
                .eq(variants.iter().map(|v| &v.name))
        })
}

/// Runs targets in a given [`Mode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Regenerator {
    mode: Mode,
    robustness: RobustnessConfig,
}

impl Regenerator {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    /// Read the target's file(s) and compute the plan.
    pub fn plan(&self, target: &Target) -> Result<Plan> {
        let source = io::read_text(target.path())?;
        self.plan_over(target, &source)
    }

    /// Plan `target` against `source` in place of its file's content.
    fn plan_over(&self, target: &Target, source: &str) -> Result<Plan> {
        if target.is_self_contained() {
            plan_text(source, None, target)
        } else {
            let declaring = io::read_text(target.declaration_path())?;
            plan_text(source, Some(&declaring), target)
        }
    }

    /// Run one target.
    ///
    /// In [`Mode::Apply`] a stale file is rewritten atomically and the
    /// outcome is [`Outcome::Regenerated`]. Errors never leave a partial write.
    pub fn run(&self, target: &Target) -> Result<TargetReport> {
        let plan = self.plan(target)?;
        let report = self.report(target, &plan);
        if report.outcome == Outcome::Regenerated {
            self.write(target.path(), &plan.candidate)?;
        }
        Ok(report)
    }

    /// Run several targets, validating all of them before writing any.
    ///
    /// Targets sharing a file are planned in order, each against the text
    /// produced by the previous one, and the final text must still be
    /// current for every one of them. Each file is then written at most
    /// once. An error in any target leaves every file untouched.
    pub fn run_all(&self, targets: &[Target]) -> Result<Vec<TargetReport>> {
        let mut files: Vec<(&NormalizedPath, Vec<usize>)> = Vec::new();
        for (i, target) in targets.iter().enumerate() {
            match files.iter().position(|(path, _)| *path == target.path()) {
                Some(slot) => files[slot].1.push(i),
                None => files.push((target.path(), vec![i])),
            }
        }

        let mut reports: Vec<Option<TargetReport>> = vec![None; targets.len()];
        let mut pending = Vec::new();
        for (path, members) in files {
            let original = io::read_text(path)?;
            let mut text = original.clone();
            for &i in &members {
                let plan = self.plan_over(&targets[i], &text)?;
                reports[i] = Some(self.report(&targets[i], &plan));
                text = plan.candidate;
            }

            for &i in &members {
                if !self.plan_over(&targets[i], &text)?.is_current() {
                    return Err(Error::Unstable {
                        name: targets[i].name().to_string(),
                        path: path.to_native(),
                    });
                }
            }

            if text != original {
                pending.push((path, text));
            }
        }

        if self.mode == Mode::Apply {
            for (path, text) in pending {
                self.write(path, &text)?;
            }
        }

        Ok(reports.into_iter().flatten().collect())
    }

    /// Describe what `plan` does to `target` under the current mode.
    fn report(&self, target: &Target, plan: &Plan) -> TargetReport {
        let checksum_before = checksum::compute_content_checksum(&plan.original);

        let mut report = TargetReport {
            name: target.name().to_string(),
            path: target.path().to_string(),
            outcome: Outcome::Unchanged,
            variants: plan.variants.len(),
            checksum_after: checksum_before.clone(),
            checksum_before,
            preview: None,
        };

        if plan.is_current() {
            tracing::debug!(name = %target.name(), path = %target.path(), "Region up to date");
            return report;
        }

        report.checksum_after = checksum::compute_content_checksum(&plan.candidate);
        report.preview = Some(Preview::compute(
            &plan.original,
            &plan.candidate,
            target.path().as_str(),
        ));

        match self.mode {
            Mode::Apply => {
                tracing::info!(
                    name = %target.name(),
                    path = %target.path(),
                    variants = plan.variants.len(),
                    "Regenerating region"
                );
                report.outcome = Outcome::Regenerated;
            }
            Mode::Check => {
                tracing::info!(name = %target.name(), path = %target.path(), "Region is stale");
                report.outcome = Outcome::Stale;
            }
        }

        report
    }

    fn write(&self, path: &NormalizedPath, text: &str) -> Result<()> {
        io::write_atomic(path, text.as_bytes(), self.robustness)?;
        tracing::info!(path = %path, "Wrote regenerated file");
        Ok(())
    }
}

/// Verify without writing.
pub fn check(target: &Target) -> Result<TargetReport> {
    Regenerator::new(Mode::Check).run(target)
}

/// Bring `target` up to date, failing if that required a write.
///
/// Call this from a test: the first run after the declaration changes
/// rewrites the file and fails; the next run passes.
pub fn ensure(target: &Target) -> Result<()> {
    let report = Regenerator::new(Mode::Apply).run(target)?;
    match report.outcome {
        Outcome::Regenerated => Err(Error::RegenerationPerformed {
            path: target.path().to_native(),
        }),
        Outcome::Unchanged | Outcome::Stale => Ok(()),
    }
}
