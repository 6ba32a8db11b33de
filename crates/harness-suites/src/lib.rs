//! harness-suites: generación de casos a partir de fixtures, comparación de
//! salidas y los dos harnesses (ejecución y categorías).
pub mod batch;
pub mod fixtures;
pub mod matcher;
pub mod runtime;

pub use batch::{BatchRunner, Category, CategoryReport, RunReport};
pub use fixtures::{generate_test_cases, TestCase};
pub use matcher::{check, outputs_match, Mismatch};
pub use runtime::{run_case, CaseFailure, RuntimeSuite};
