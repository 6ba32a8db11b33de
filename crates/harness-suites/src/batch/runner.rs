//! Batch Category Runner.
//!
//! Cada programa de una categoría pasa por una única invocación opaca del
//! punto de entrada `compile <file>` y se clasifica solo por su código de
//! salida. Los programas de una categoría se reparten en un pool de rayon de
//! tamaño fijo; la agregación ocurre tras recoger todos los resultados.
use std::num::NonZeroUsize;
use std::path::Path;

use harness_core::constants::SOURCE_EXTENSION;
use harness_core::{CommandSpec, HarnessError, ProcessOutput, ProcessRunner};
use log::{debug, info, warn};
use rayon::prelude::*;

use super::category::{select, Categories, Category};
use super::report::{CategoryReport, RunReport};
use crate::fixtures::discover_programs;

/// Progreso observable de una ejecución por categorías.
#[derive(Debug, Clone, Copy)]
pub enum BatchEvent<'a> {
    Started(&'a Category),
    Finished(&'a CategoryReport),
}

pub fn default_workers() -> usize {
    std::thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1)
}

pub struct BatchRunner {
    compile_entry: CommandSpec,
    runner: ProcessRunner,
    pool: rayon::ThreadPool,
}

impl BatchRunner {
    /// `workers = None` dimensiona el pool según el paralelismo disponible.
    pub fn new(compile_entry: CommandSpec, runner: ProcessRunner, workers: Option<usize>) -> Result<Self, HarnessError> {
        let workers = workers.unwrap_or_else(default_workers).max(1);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(workers)
                                                  .thread_name(|i| format!("batch-worker-{i}"))
                                                  .build()
                                                  .map_err(|e| HarnessError::Config(format!("worker pool: {e}")))?;
        Ok(Self { compile_entry,
                  runner,
                  pool })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// `compile <file>` con captura de stdout y stderr.
    pub fn run_program(&self, file: &Path) -> Result<ProcessOutput, HarnessError> {
        let cmd = self.compile_entry.clone().path_arg(file);
        self.runner.run(&cmd, None)
    }

    pub fn run_category(&self, category: &Category) -> Result<CategoryReport, HarnessError> {
        debug!("running category {} from {}", category.name, category.dir.display());
        let programs = if category.dir.is_dir() {
            discover_programs(&category.dir, SOURCE_EXTENSION)?
        } else {
            warn!("category {} has no directory at {}", category.name, category.dir.display());
            Vec::new()
        };

        // barrera: `collect` espera a todos los workers de la categoría
        let results: Vec<_> = self.pool.install(|| {
                                           programs.into_par_iter()
                                                   .map(|file| {
                                                       let result = self.run_program(&file);
                                                       (file, result)
                                                   })
                                                   .collect()
                                       });

        let mut report = CategoryReport::new(&category.name, category.expected_exit_code);
        for (file, result) in results {
            report.record(file, result);
        }
        info!("{}", report.summary_line());
        Ok(report)
    }

    /// Ejecuta las categorías seleccionadas en orden. `observe` recibe el
    /// inicio y el informe de cada categoría; su primer error corta la
    /// ejecución.
    pub fn run_each<F, E>(&self, all: &Categories, filter: Option<&[String]>, mut observe: F) -> Result<RunReport, E>
        where F: FnMut(BatchEvent<'_>) -> Result<(), E>,
              E: From<HarnessError>
    {
        let mut run = RunReport::default();
        for category in select(all, filter)? {
            observe(BatchEvent::Started(category))?;
            let report = self.run_category(category)?;
            observe(BatchEvent::Finished(&report))?;
            run.push(report);
        }
        Ok(run)
    }

    pub fn run(&self, all: &Categories, filter: Option<&[String]>) -> Result<RunReport, HarnessError> {
        self.run_each(all, filter, |_| Ok(()))
    }
}
