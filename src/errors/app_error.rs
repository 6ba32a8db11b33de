use harness_core::HarnessError;
use thiserror::Error;

/// Errores de la aplicación (CLI).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Uso incorrecto: {0}")]
    Usage(String),
    #[error("Error del harness: {0}")]
    Harness(#[from] HarnessError),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
}
