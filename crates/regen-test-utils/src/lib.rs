//! Shared test utilities for the regen workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`] - canonical source texts and manifests
//! - [`project`] - [`TestProject`](project::TestProject) temp-directory builder

pub mod fixtures;
pub mod project;

pub use project::TestProject;
