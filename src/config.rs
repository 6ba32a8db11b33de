//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable con la
//! configuración del toolchain y de los harnesses.
use std::env;
use std::path::PathBuf;

use harness_core::config::init_dotenv;
use harness_core::{HarnessError, ToolchainConfig};

/// Configuración global de la aplicación.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Compilador, ensamblador, emulador y timeout.
    pub toolchain: ToolchainConfig,
    /// Raíz de los programas de ejemplo del harness por categorías.
    pub examples_dir: PathBuf,
    /// Tamaño del pool de workers (None = paralelismo disponible).
    pub workers: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, HarnessError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
        where F: Fn(&str) -> Option<String>
    {
        let toolchain = ToolchainConfig::from_lookup(&lookup)?;
        let examples_dir = lookup("WACC_EXAMPLES_DIR").map(PathBuf::from)
                                                      .unwrap_or_else(|| toolchain.root.join("examples"));
        let workers = match lookup("WACC_WORKERS") {
            None => None,
            Some(v) => match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(HarnessError::Config(format!("WACC_WORKERS must be a positive integer: {v:?}"))),
            },
        };
        Ok(Self { toolchain,
                  examples_dir,
                  workers })
    }
}
