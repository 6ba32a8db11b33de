//! Etapas del pipeline: compile → assemble → emulate.
//!
//! `compile` y `assemble` clasifican su fallo (código != 0) con un error
//! etiquetado por etapa. `emulate` no clasifica: el programa bajo prueba
//! puede terminar legítimamente con código distinto de cero. Las etapas
//! corren estrictamente en secuencia y el pipeline se corta en el primer
//! fallo.
use std::path::Path;

use log::debug;

use super::artifact::PipelineArtifact;
use crate::config::ToolchainConfig;
use crate::errors::{HarnessError, Stage, StageFailure};
use crate::process::{CommandSpec, ProcessOutput, ProcessRunner};

/// Resultado de la etapa terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

#[derive(Debug, Clone)]
pub struct Toolchain {
    compiler: CommandSpec,
    assembler: CommandSpec,
    emulator: CommandSpec,
    runner: ProcessRunner,
}

impl Toolchain {
    /// Cada `CommandSpec` incluye ya sus flags fijos; las etapas añaden
    /// las rutas de entrada/salida.
    pub fn new(compiler: CommandSpec, assembler: CommandSpec, emulator: CommandSpec, runner: ProcessRunner) -> Self {
        Self { compiler,
               assembler,
               emulator,
               runner }
    }

    pub fn from_config(cfg: &ToolchainConfig) -> Self {
        Self::new(cfg.compiler_command(),
                  cfg.assembler_command(),
                  cfg.emulator_command(),
                  ProcessRunner::new(cfg.timeout))
    }

    /// `<compiler> [flags] -o <asm> <source>`.
    pub fn compile(&self, source: &Path) -> Result<PipelineArtifact, HarnessError> {
        let asm = PipelineArtifact::reserve(Stage::Compile, ".s")?;
        let cmd = self.compiler.clone().arg("-o").path_arg(asm.path()).path_arg(source);
        let out = self.runner.run(&cmd, None)?;
        if !out.success() {
            return Err(HarnessError::CompileFailure(stage_failure(out)));
        }
        Ok(asm)
    }

    /// `<assembler> [flags] -o <binary> <asm>`.
    pub fn assemble(&self, asm: &PipelineArtifact) -> Result<PipelineArtifact, HarnessError> {
        let binary = PipelineArtifact::reserve(Stage::Assemble, "")?;
        let cmd = self.assembler.clone().arg("-o").path_arg(binary.path()).path_arg(asm.path());
        let out = self.runner.run(&cmd, None)?;
        if !out.success() {
            return Err(HarnessError::AssembleFailure(stage_failure(out)));
        }
        Ok(binary)
    }

    /// `<emulator> [flags] <binary>` reenviando `stdin`. Solo falla por
    /// timeout o error al lanzar el emulador.
    pub fn emulate(&self, binary: &PipelineArtifact, stdin: &str) -> Result<EmulatorOutcome, HarnessError> {
        let cmd = self.emulator.clone().path_arg(binary.path());
        let out = self.runner.run(&cmd, Some(stdin))?;
        Ok(EmulatorOutcome { stdout: out.stdout_text(),
                             stderr: out.stderr_text(),
                             exit_code: out.exit_code })
    }

    /// Pipeline completo para un programa fuente.
    pub fn execute(&self, program: &Path, stdin: &str) -> Result<EmulatorOutcome, HarnessError> {
        debug!("pipeline start: {}", program.display());
        let binary = {
            let asm = self.compile(program)?;
            self.assemble(&asm)?
        };
        self.emulate(&binary, stdin)
    }
}

fn stage_failure(out: ProcessOutput) -> StageFailure {
    StageFailure { stdout: out.stdout_text(),
                   stderr: out.stderr_text(),
                   exit_code: out.exit_code }
}
