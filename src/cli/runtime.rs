use std::path::Path;

use harness_core::Toolchain;
use harness_suites::RuntimeSuite;
use libtest_mimic::Conclusion;
use log::info;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Descubre y ejecuta todos los casos bajo `path`. Un conjunto de fixtures
/// mal formado aborta antes de ejecutar nada.
pub fn run_runtime(config: &AppConfig, path: &Path) -> Result<Conclusion, AppError> {
    if !path.exists() {
        return Err(AppError::Usage(format!("no existe: {}", path.display())));
    }
    config.toolchain.validate()?;
    let suite = RuntimeSuite::discover(path, Toolchain::from_config(&config.toolchain))?;
    info!("{} runtime cases under {}", suite.cases().len(), path.display());
    Ok(suite.run(config.workers))
}
