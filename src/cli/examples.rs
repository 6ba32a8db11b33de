use std::io::{self, Write};

use harness_core::ProcessRunner;
use harness_suites::batch::{default_categories, BatchEvent, BatchRunner, RunReport};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Ejecuta el harness por categorías sobre stdout.
pub fn run_examples(config: &AppConfig, filter: &[String]) -> Result<RunReport, AppError> {
    run_examples_to(config, filter, &mut io::stdout().lock())
}

/// Anuncia cada categoría al empezarla, vuelca sus fallos al terminarla y
/// escribe el resumen final en `out`.
pub fn run_examples_to<W: Write>(config: &AppConfig, filter: &[String], out: &mut W) -> Result<RunReport, AppError> {
    config.toolchain.validate()?;
    let batch = BatchRunner::new(config.toolchain.compile_entry_command(),
                                 ProcessRunner::new(config.toolchain.timeout),
                                 config.workers)?;
    let categories = default_categories(&config.examples_dir);
    let report = batch.run_each(&categories, Some(filter), |event| -> Result<(), AppError> {
                          match event {
                              BatchEvent::Started(category) => writeln!(out, "Running {} tests...", category.name)?,
                              BatchEvent::Finished(category) => write!(out, "{}", category.render_failures())?,
                          }
                          out.flush()?;
                          Ok(())
                      })?;
    write!(out, "{}", report.summary())?;
    out.flush()?;
    Ok(report)
}
