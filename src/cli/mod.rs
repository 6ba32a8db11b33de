//! CLI mínima:
//! - `wacc-harness examples [CATEGORY...]`: harness por categorías.
//! - `wacc-harness runtime <PATH>`: harness de ejecución sobre fixtures.

pub mod examples;
pub mod runtime;

use std::path::PathBuf;

use crate::errors::AppError;

pub const USAGE: &str = "Uso: wacc-harness examples [CATEGORY...] | wacc-harness runtime <dirname|filename>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Examples { categories: Vec<String> },
    Runtime { path: PathBuf },
}

/// Interpreta los argumentos (sin el nombre del binario).
pub fn parse_args(args: &[String]) -> Result<Command, AppError> {
    match args.split_first() {
        Some((cmd, rest)) if cmd == "examples" => Ok(Command::Examples { categories: rest.to_vec() }),
        Some((cmd, [path])) if cmd == "runtime" => Ok(Command::Runtime { path: PathBuf::from(path) }),
        Some((cmd, _)) if cmd == "runtime" => Err(AppError::Usage("runtime espera exactamente una ruta".into())),
        Some((cmd, _)) => Err(AppError::Usage(format!("subcomando desconocido: {cmd}"))),
        None => Err(AppError::Usage("falta el subcomando".into())),
    }
}
