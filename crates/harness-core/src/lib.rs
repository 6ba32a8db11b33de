//! harness-core: ejecución acotada de procesos y pipeline del toolchain WACC.
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod pipeline;
pub mod process;

pub use config::ToolchainConfig;
pub use errors::{HarnessError, Stage, StageFailure};
pub use pipeline::{EmulatorOutcome, PipelineArtifact, Toolchain};
pub use process::{run_bounded, CommandSpec, ProcessOutput, ProcessRunner};
