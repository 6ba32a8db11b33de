//! Taxonomía de errores del harness.
//!
//! - `Timeout`: una invocación externa superó su presupuesto de tiempo.
//! - `CompileFailure` / `AssembleFailure`: la etapa terminó con código != 0
//!   y conserva stdout/stderr/código para diagnóstico.
//! - `FixtureMissing` / `InvalidExitCode`: el conjunto de fixtures está mal
//!   formado (error de configuración, no del toolchain).
//!
//! Las discrepancias de salida no son errores: se modelan como resultado de
//! un caso (ver `harness-suites::matcher`).

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Etapa del pipeline compile → assemble → emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Compile,
    Assemble,
    Emulate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Compile => "compile",
            Stage::Assemble => "assemble",
            Stage::Emulate => "emulate",
        };
        f.write_str(name)
    }
}

/// Salida capturada de una etapa que terminó con código distinto de cero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "exit code {}", self.exit_code)?;
        writeln!(f, "stdout")?;
        writeln!(f, "{}", self.stdout)?;
        writeln!(f, "stderr")?;
        write!(f, "{}", self.stderr)
    }
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("timeout after {}s: {command}", timeout.as_secs_f64())]
    Timeout { command: String, timeout: Duration },
    #[error("could not spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("compile failure, {0}")]
    CompileFailure(StageFailure),
    #[error("assemble failure, {0}")]
    AssembleFailure(StageFailure),
    #[error("fixture not found: {}", path.display())]
    FixtureMissing { path: PathBuf },
    #[error("invalid exit code {content:?} in {}", path.display())]
    InvalidExitCode { path: PathBuf, content: String },
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Etapa que produjo el error, si es un fallo propio del pipeline.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            HarnessError::CompileFailure(_) => Some(Stage::Compile),
            HarnessError::AssembleFailure(_) => Some(Stage::Assemble),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, HarnessError::Timeout { .. })
    }
}
