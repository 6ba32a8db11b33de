//! Informe agregado del harness por categorías.
//!
//! Se construye después de la barrera de cada categoría y se devuelve al
//! llamador; no hay estado global de contadores.
use std::fmt::Write as _;
use std::path::PathBuf;

use harness_core::{HarnessError, ProcessOutput};
use indexmap::IndexMap;

const HEAVY_RULE: &str = "================================================================================";
const LIGHT_RULE: &str = "--------------------------------------------------------------------------------";

/// Diagnóstico completo de un programa que no obtuvo el código esperado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDiagnostic {
    /// Posición del programa dentro de su categoría.
    pub index: usize,
    pub file: PathBuf,
    /// `None` si la invocación no llegó a terminar (timeout, spawn).
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Error de la invocación, si lo hubo.
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub name: String,
    pub expected_exit_code: i32,
    pub passed: usize,
    pub total: usize,
    pub failures: Vec<FailureDiagnostic>,
}

impl CategoryReport {
    pub fn new(name: impl Into<String>, expected_exit_code: i32) -> Self {
        Self { name: name.into(),
               expected_exit_code,
               passed: 0,
               total: 0,
               failures: Vec::new() }
    }

    /// Registra el resultado de un programa. Solo cuenta el código de salida.
    pub fn record(&mut self, file: PathBuf, result: Result<ProcessOutput, HarnessError>) {
        let index = self.total;
        self.total += 1;
        match result {
            Ok(out) if out.exit_code == self.expected_exit_code => self.passed += 1,
            Ok(out) => self.failures.push(FailureDiagnostic { index,
                                                              file,
                                                              exit_code: Some(out.exit_code),
                                                              stdout: out.stdout_text(),
                                                              stderr: out.stderr_text(),
                                                              reason: None }),
            Err(e) => self.failures.push(FailureDiagnostic { index,
                                                             file,
                                                             exit_code: None,
                                                             stdout: String::new(),
                                                             stderr: String::new(),
                                                             reason: Some(e.to_string()) }),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    pub fn summary_line(&self) -> String {
        format!("{}: {} / {} tests passed.", self.name, self.passed, self.total)
    }

    /// Volcado de diagnóstico de cada fallo, en orden de descubrimiento.
    pub fn render_failures(&self) -> String {
        let mut out = String::new();
        for failure in &self.failures {
            let _ = writeln!(out, "{HEAVY_RULE}");
            let _ = writeln!(out, "{} test {} FAILED!", self.name, failure.index);
            let _ = writeln!(out, "{LIGHT_RULE}");
            let _ = writeln!(out, "File: {}", failure.file.display());
            let _ = writeln!(out, "{LIGHT_RULE}");
            match (failure.exit_code, &failure.reason) {
                (Some(code), _) => {
                    let _ = writeln!(out, "Exit code: {code} (expected {})", self.expected_exit_code);
                }
                (None, Some(reason)) => {
                    let _ = writeln!(out, "Error: {reason}");
                }
                (None, None) => {}
            }
            let _ = writeln!(out, "{LIGHT_RULE}");
            let _ = writeln!(out, "Output:");
            let _ = writeln!(out, "{}", failure.stdout.trim_end_matches('\n'));
            let _ = writeln!(out, "{LIGHT_RULE}");
            let _ = writeln!(out, "Errors:");
            let _ = writeln!(out, "{}", failure.stderr.trim_end_matches('\n'));
            let _ = writeln!(out, "{HEAVY_RULE}");
            let _ = writeln!(out);
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    categories: IndexMap<String, CategoryReport>,
}

impl RunReport {
    pub fn push(&mut self, report: CategoryReport) {
        self.categories.insert(report.name.clone(), report);
    }

    pub fn get(&self, name: &str) -> Option<&CategoryReport> {
        self.categories.get(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryReport> {
        self.categories.values()
    }

    pub fn all_passed(&self) -> bool {
        self.categories.values().all(CategoryReport::all_passed)
    }

    /// Líneas `passed / total` por categoría más el cierre.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for report in self.categories.values() {
            let _ = writeln!(out, "{}", report.summary_line());
        }
        out.push_str("Tests complete.\n");
        out
    }

    pub fn render(&self) -> String {
        let mut out: String = self.categories.values().map(CategoryReport::render_failures).collect();
        out.push_str(&self.summary());
        out
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn exited(code: i32, stdout: &str, stderr: &str) -> Result<ProcessOutput, HarnessError> {
        Ok(ProcessOutput { stdout: stdout.as_bytes().to_vec(),
                           stderr: stderr.as_bytes().to_vec(),
                           exit_code: code })
    }

    #[test]
    fn scoring_uses_exit_code_only() {
        let mut report = CategoryReport::new("Invalid-Syntax", 100);
        report.record("a.wacc".into(), exited(100, "whatever", ""));
        report.record("b.wacc".into(), exited(0, "", ""));
        assert_eq!((report.passed, report.total), (1, 2));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].exit_code, Some(0));
        assert!(!report.all_passed());
    }

    #[test]
    fn invocation_errors_are_recorded_as_failures() {
        let mut report = CategoryReport::new("Valid", 0);
        report.record("slow.wacc".into(),
                      Err(HarnessError::Timeout { command: "compile slow.wacc".into(),
                                                  timeout: Duration::from_secs(5) }));
        assert_eq!((report.passed, report.total), (0, 1));
        let failure = &report.failures[0];
        assert_eq!(failure.exit_code, None);
        assert!(failure.reason.as_deref().unwrap_or_default().starts_with("timeout after 5s"));
    }

    #[test]
    fn render_dumps_file_output_and_errors() {
        let mut report = CategoryReport::new("Valid", 0);
        report.record("valid/ok.wacc".into(), exited(0, "", ""));
        report.record("valid/broken.wacc".into(), exited(1, "partial out\n", "semantic error\n"));
        let dump = report.render_failures();
        assert!(dump.contains("Valid test 1 FAILED!"));
        assert!(dump.contains("File: valid/broken.wacc"));
        assert!(dump.contains("Exit code: 1 (expected 0)"));
        assert!(dump.contains("Output:\npartial out\n"));
        assert!(dump.contains("Errors:\nsemantic error\n"));
        assert_eq!(dump.matches("FAILED!").count(), 1);
    }

    #[test]
    fn summary_lists_categories_in_insertion_order() {
        let mut run = RunReport::default();
        let mut valid = CategoryReport::new("Valid", 0);
        valid.record("a.wacc".into(), exited(0, "", ""));
        run.push(valid);
        run.push(CategoryReport::new("Invalid-Syntax", 100));
        assert_eq!(run.summary(),
                   "Valid: 1 / 1 tests passed.\nInvalid-Syntax: 0 / 0 tests passed.\nTests complete.\n");
        assert!(run.all_passed());
        assert_eq!(run.render(), run.summary());
    }
}
