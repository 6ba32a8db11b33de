use std::path::Path;

use harness_core::HarnessError;

/// Interpreta el contenido de un fixture `.exit`.
///
/// Vacío (o solo espacios) equivale a código 0; cualquier otro contenido que
/// no sea un entero es un fixture mal formado.
pub fn parse_exit_code(content: &str, path: &Path) -> Result<i32, HarnessError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse()
           .map_err(|_| HarnessError::InvalidExitCode { path: path.to_path_buf(),
                                                        content: content.to_string() })
}
