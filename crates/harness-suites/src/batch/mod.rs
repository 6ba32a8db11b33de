//! Harness por categorías: clasifica programas de ejemplo por el código de
//! salida del compilador.

mod category;
mod report;
mod runner;

pub use category::{categories, default_categories, select, Categories, Category};
pub use report::{CategoryReport, FailureDiagnostic, RunReport};
pub use runner::{default_workers, BatchEvent, BatchRunner};
