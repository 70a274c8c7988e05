//! The `regen.toml` manifest.
//!
//! ```toml
//! [[target]]
//! name = "exit-codes"
//! path = "src/exit.rs"
//! template = "{index} => ExitKind::{name},\n"
//!
//! [target.declaration]
//! start = "pub enum ExitKind {\n"
//! end = "}"
//!
//! [target.region]
//! start = "// regen:begin\n"
//! end = "// regen:end"
//! ```
//!
//! Relative paths are resolved against the directory holding the manifest.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use regen_fs::{ConfigStore, NormalizedPath};
use regen_markers::MarkerPair;

use crate::render::Template;
use crate::target::Target;
use crate::variant::ExtractOptions;
use crate::{Error, Result, Role};

/// A literal start/end pair as written in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerSpec {
    pub start: String,
    pub end: String,
}

/// One `[[target]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSpec {
    pub name: String,
    pub path: String,
    /// File holding the declaration block, if not `path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_in: Option<String>,
    pub template: String,
    pub declaration: MarkerSpec,
    pub region: MarkerSpec,
    #[serde(default)]
    pub variants: ExtractOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "target", default)]
    pub targets: Vec<TargetSpec>,
    /// Directory that relative target paths are resolved against.
    #[serde(skip)]
    pub root: Option<NormalizedPath>,
}

impl Manifest {
    /// Load a manifest from disk (TOML, JSON or YAML by extension).
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let mut manifest: Manifest = ConfigStore::new().load(path)?;

        let dir = path.parent().unwrap_or_else(|| NormalizedPath::new("."));
        manifest.root = Some(dir.canonicalize()?);
        manifest.validate()?;

        tracing::debug!(path = %path, targets = manifest.targets.len(), "Loaded manifest");
        Ok(manifest)
    }

    /// Reject repeated target names.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for spec in &self.targets {
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::DuplicateTarget {
                    name: spec.name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.name.as_str())
    }

    /// Build every target, or only the one called `only`.
    pub fn targets(&self, only: Option<&str>) -> Result<Vec<Target>> {
        if let Some(name) = only {
            if !self.targets.iter().any(|t| t.name == name) {
                return Err(Error::UnknownTarget {
                    name: name.to_string(),
                });
            }
        }

        self.targets
            .iter()
            .filter(|spec| only.is_none_or(|name| spec.name == name))
            .map(|spec| self.build(spec))
            .collect()
    }

    fn build(&self, spec: &TargetSpec) -> Result<Target> {
        let resolve = |raw: &str| match &self.root {
            Some(root) => NormalizedPath::new(raw).resolve_against(root),
            None => NormalizedPath::new(raw),
        };
        let path = resolve(&spec.path);

        let declaration = MarkerPair::new(&spec.declaration.start, &spec.declaration.end)
            .map_err(|e| Error::marker(Role::Declaration, path.to_native(), e))?;
        let region = MarkerPair::new(&spec.region.start, &spec.region.end)
            .map_err(|e| Error::marker(Role::Region, path.to_native(), e))?;
        let template = Template::parse(&spec.template)?;

        let mut target = Target::new(&spec.name, path, declaration, region, template)
            .with_options(spec.variants.clone());
        if let Some(declared_in) = &spec.declared_in {
            target = target.declared_in(resolve(declared_in));
        }
        Ok(target)
    }
}
