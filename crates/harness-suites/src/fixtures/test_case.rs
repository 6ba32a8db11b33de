use std::path::PathBuf;

use harness_core::hashing::input_id;

/// Caso de prueba generado a partir de un programa y un trío de fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub program: PathBuf,
    /// Sufijo distintivo del fixture (`foo.<id>.input`).
    pub fixture_id: String,
    pub stdin: String,
    pub expected_stdout: String,
    pub expected_exit_code: i32,
}

impl TestCase {
    /// Nombre determinista: ruta del programa, id del fixture y hash del stdin.
    pub fn name(&self) -> String {
        format!("{}::{}::{}",
                self.program.display(),
                self.fixture_id,
                input_id(&self.stdin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(program: &str, id: &str, stdin: &str) -> TestCase {
        TestCase { program: PathBuf::from(program),
                   fixture_id: id.into(),
                   stdin: stdin.into(),
                   expected_stdout: String::new(),
                   expected_exit_code: 0 }
    }

    #[test]
    fn names_are_stable_and_distinct() {
        let a = case("valid/read.wacc", "a", "1\n");
        assert_eq!(a.name(), a.clone().name());
        assert!(a.name().starts_with("valid/read.wacc::a::"));
        // misma entrada, distinto fixture
        assert_ne!(a.name(), case("valid/read.wacc", "b", "1\n").name());
        // mismo fixture, distinto programa
        assert_ne!(a.name(), case("valid/echo.wacc", "a", "1\n").name());
    }
}
