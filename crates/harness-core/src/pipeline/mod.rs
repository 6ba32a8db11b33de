//! Pipeline Stage Functions.
//!
//! Tres envoltorios finos sobre el `ProcessRunner`; cada uno produce un
//! `PipelineArtifact` consumido por la siguiente etapa.

mod artifact;
mod stages;

pub use artifact::PipelineArtifact;
pub use stages::{EmulatorOutcome, Toolchain};
