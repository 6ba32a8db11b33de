//! Harness de ejecución: cada caso generado se convierte en un `Trial` de
//! libtest-mimic, que se encarga del paralelismo, el filtrado y el resumen
//! estándar de la ejecución.
use std::path::Path;
use std::sync::Arc;

use harness_core::constants::SOURCE_EXTENSION;
use harness_core::{HarnessError, Toolchain};
use libtest_mimic::{Arguments, Conclusion, Failed, Trial};
use thiserror::Error;

use crate::fixtures::{generate_test_cases, TestCase};
use crate::matcher::{check, Mismatch};

/// Motivo por el que un caso no pasó.
#[derive(Debug, Error)]
pub enum CaseFailure {
    #[error(transparent)]
    Pipeline(#[from] HarnessError),
    #[error(transparent)]
    Mismatch(#[from] Mismatch),
}

/// Ejecuta un caso de principio a fin y lo verifica.
pub fn run_case(toolchain: &Toolchain, case: &TestCase) -> Result<(), CaseFailure> {
    let outcome = toolchain.execute(&case.program, &case.stdin)?;
    check(case, &outcome)?;
    Ok(())
}

pub struct RuntimeSuite {
    toolchain: Arc<Toolchain>,
    cases: Vec<TestCase>,
}

impl RuntimeSuite {
    pub fn new(toolchain: Toolchain, cases: Vec<TestCase>) -> Self {
        Self { toolchain: Arc::new(toolchain),
               cases }
    }

    /// Genera los casos bajo `root`; un fixture mal formado aborta aquí.
    pub fn discover(root: &Path, toolchain: Toolchain) -> Result<Self, HarnessError> {
        let cases = generate_test_cases(root, SOURCE_EXTENSION)?;
        Ok(Self::new(toolchain, cases))
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn trials(&self) -> Vec<Trial> {
        self.cases
            .iter()
            .map(|case| {
                let toolchain = Arc::clone(&self.toolchain);
                let case = case.clone();
                Trial::test(case.name(), move || run_case(&toolchain, &case).map_err(Failed::from))
            })
            .collect()
    }

    /// Corre todos los casos; `threads = None` usa el valor por defecto de libtest.
    pub fn run(&self, threads: Option<usize>) -> Conclusion {
        let mut args = Arguments::default();
        args.test_threads = threads;
        libtest_mimic::run(&args, self.trials())
    }
}
