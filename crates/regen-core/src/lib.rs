//! Keep a generated region of a source file in sync with a declared list.
//!
//! A [`Target`] names a file, a pair of markers around the declaration block
//! (for example the body of an enum), a pair of markers around the generated
//! region, and a [`Render`] rule mapping `(index, name)` to one line of
//! output. The [`Regenerator`] reads the file, re-renders the region and
//! writes the file back only if the result differs.
//!
//! [`ensure`] is meant to be called from a test: it fails the first time it
//! has to rewrite the file so that a stale region is never accepted in a
//! single pass, and succeeds on the re-run.
//!
//! ```no_run
//! use regen_core::{MarkerPair, Target, Template};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let target = Target::new(
//!     "container-codes",
//!     "src/container.rs",
//!     MarkerPair::new("pub enum Container {\n", "}")?,
//!     MarkerPair::new("// regen:begin\n", "        // regen:end")?,
//!     Template::parse("        {index} => Container::{name},\n")?,
//! );
//! regen_core::ensure(&target)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod manifest;
pub mod regen;
pub mod render;
pub mod report;
pub mod target;
pub mod variant;

pub use error::{Error, ErrorKind, Result, Role};
pub use manifest::{Manifest, MarkerSpec, TargetSpec};
pub use regen::{Mode, Outcome, Plan, Regenerator, check, ensure, plan_text};
pub use regen_markers::MarkerPair;
pub use render::{Render, Template, render_region};
pub use report::{Preview, TargetReport};
pub use target::Target;
pub use variant::{DuplicatePolicy, ExtractOptions, Variant, extract_variants};
