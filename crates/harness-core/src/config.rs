//! Carga de configuración del toolchain desde variables de entorno.
//!
//! Convención `WACC_*`; todas tienen valor por defecto salvo que se quiera
//! apuntar a otra instalación del compilador, ensamblador o emulador.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::constants::{
    DEFAULT_ASSEMBLER, DEFAULT_ASSEMBLER_FLAGS, DEFAULT_COMPILE_FLAGS, DEFAULT_EMULATOR, DEFAULT_EMULATOR_FLAGS,
    DEFAULT_TIMEOUT_SECS,
};
use crate::errors::HarnessError;
use crate::process::CommandSpec;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[derive(Debug, Clone)]
pub struct ToolchainConfig {
    /// Raíz del proyecto del compilador.
    pub root: PathBuf,
    /// Punto de entrada `compile`, sin flags.
    pub compile_entry: PathBuf,
    pub compile_flags: Vec<String>,
    pub assembler: PathBuf,
    pub assembler_flags: Vec<String>,
    pub emulator: PathBuf,
    pub emulator_flags: Vec<String>,
    /// Presupuesto por invocación externa.
    pub timeout: Duration,
}

impl ToolchainConfig {
    /// Valores por defecto relativos a `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self { compile_entry: root.join("compile"),
               root,
               compile_flags: owned(DEFAULT_COMPILE_FLAGS),
               assembler: PathBuf::from(DEFAULT_ASSEMBLER),
               assembler_flags: owned(DEFAULT_ASSEMBLER_FLAGS),
               emulator: PathBuf::from(DEFAULT_EMULATOR),
               emulator_flags: owned(DEFAULT_EMULATOR_FLAGS),
               timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }

    pub fn from_env() -> Result<Self, HarnessError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
        where F: Fn(&str) -> Option<String>
    {
        let root = lookup("WACC_ROOT").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        let mut cfg = Self::with_root(root);
        if let Some(v) = lookup("WACC_COMPILER") {
            cfg.compile_entry = PathBuf::from(v);
        }
        if let Some(v) = lookup("WACC_ASSEMBLER") {
            cfg.assembler = PathBuf::from(v);
        }
        if let Some(v) = lookup("WACC_EMULATOR") {
            cfg.emulator = PathBuf::from(v);
        }
        if let Some(v) = lookup("WACC_COMPILE_FLAGS") {
            cfg.compile_flags = split_flags(&v);
        }
        if let Some(v) = lookup("WACC_ASSEMBLER_FLAGS") {
            cfg.assembler_flags = split_flags(&v);
        }
        if let Some(v) = lookup("WACC_EMULATOR_FLAGS") {
            cfg.emulator_flags = split_flags(&v);
        }
        if let Some(v) = lookup("WACC_TIMEOUT_SECS") {
            let secs: f64 = v.trim()
                             .parse()
                             .map_err(|_| HarnessError::Config(format!("WACC_TIMEOUT_SECS is not a number: {v:?}")))?;
            if !secs.is_finite() || secs <= 0.0 {
                return Err(HarnessError::Config(format!("WACC_TIMEOUT_SECS must be positive: {v:?}")));
            }
            cfg.timeout = Duration::from_secs_f64(secs);
        }
        Ok(cfg)
    }

    /// Comprueba que el punto de entrada `compile` existe.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if !Path::new(&self.compile_entry).exists() {
            return Err(HarnessError::Config(format!("compile script not found: {}",
                                                    self.compile_entry.display())));
        }
        Ok(())
    }

    /// Invocación opaca usada por el harness por categorías: `compile <file>`.
    pub fn compile_entry_command(&self) -> CommandSpec {
        CommandSpec::new(&self.compile_entry)
    }

    pub fn compiler_command(&self) -> CommandSpec {
        CommandSpec::new(&self.compile_entry).args(self.compile_flags.iter().cloned())
    }

    pub fn assembler_command(&self) -> CommandSpec {
        CommandSpec::new(&self.assembler).args(self.assembler_flags.iter().cloned())
    }

    pub fn emulator_command(&self) -> CommandSpec {
        CommandSpec::new(&self.emulator).args(self.emulator_flags.iter().cloned())
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self::with_root(".")
    }
}

fn owned(flags: &[&str]) -> Vec<String> {
    flags.iter().map(|f| f.to_string()).collect()
}

fn split_flags(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
