//! Output Matcher: comparación insensible a direcciones de memoria.
//!
//! Las ejecuciones emuladas imprimen direcciones de heap/stack que cambian
//! entre ejecuciones. Dos salidas son equivalentes si son idénticas o si
//! tienen el mismo número de `0x<hex>` y coinciden en todo el texto que hay
//! entre ellos. El código de salida se compara exacto.
use std::borrow::Cow;
use std::fmt;

use harness_core::constants::ADDRESS_PLACEHOLDER;
use harness_core::EmulatorOutcome;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::fixtures::TestCase;

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"0x[0-9a-fA-F]+").expect("static regex"));

/// Forma canónica para mostrar. No sirve para comparar: un texto que ya
/// contenga el marcador sería indistinguible de una dirección.
pub fn normalize_addresses(s: &str) -> Cow<'_, str> {
    ADDRESS_RE.replace_all(s, ADDRESS_PLACEHOLDER)
}

/// Compara tramo a tramo el texto fuera de las direcciones.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    actual == expected || ADDRESS_RE.split(actual).eq(ADDRESS_RE.split(expected))
}

/// Discrepancia entre lo obtenido y lo esperado. Conserva las salidas sin
/// normalizar para poder depurar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub actual_stdout: String,
    pub expected_stdout: String,
    pub actual_exit_code: i32,
    pub expected_exit_code: i32,
}

impl Mismatch {
    pub fn stdout_differs(&self) -> bool {
        !outputs_match(&self.actual_stdout, &self.expected_stdout)
    }

    pub fn exit_code_differs(&self) -> bool {
        self.actual_exit_code != self.expected_exit_code
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stdout_differs() {
            writeln!(f, "stdout mismatch")?;
            writeln!(f, "--- expected")?;
            writeln!(f, "{}", self.expected_stdout)?;
            writeln!(f, "--- actual")?;
            writeln!(f, "{}", self.actual_stdout)?;
        }
        if self.exit_code_differs() {
            writeln!(f,
                     "exit code mismatch: expected {}, got {}",
                     self.expected_exit_code, self.actual_exit_code)?;
        }
        Ok(())
    }
}

impl std::error::Error for Mismatch {}

/// Verifica el resultado de emular `case`.
pub fn check(case: &TestCase, outcome: &EmulatorOutcome) -> Result<(), Mismatch> {
    if outputs_match(&outcome.stdout, &case.expected_stdout) && outcome.exit_code == case.expected_exit_code {
        return Ok(());
    }
    Err(Mismatch { actual_stdout: outcome.stdout.clone(),
                   expected_stdout: case.expected_stdout.clone(),
                   actual_exit_code: outcome.exit_code,
                   expected_exit_code: case.expected_exit_code })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn case(expected: &str, exit: i32) -> TestCase {
        TestCase { program: PathBuf::from("valid/print_addr.wacc"),
                   fixture_id: "a".into(),
                   stdin: String::new(),
                   expected_stdout: expected.into(),
                   expected_exit_code: exit }
    }

    fn outcome(stdout: &str, exit: i32) -> EmulatorOutcome {
        EmulatorOutcome { stdout: stdout.into(),
                          stderr: String::new(),
                          exit_code: exit }
    }

    #[test]
    fn normalize_replaces_every_address() {
        assert_eq!(normalize_addresses("p=0x1a2b q=0XFF r=0xDEADbeef"), "p=ADDR q=0XFF r=ADDR");
        assert!(matches!(normalize_addresses("no addresses"), Cow::Borrowed(_)));
    }

    #[test]
    fn address_only_differences_match() {
        assert!(outputs_match("addr=0xffaa00 result=5", "addr=0x1a2b result=5"));
        assert!(outputs_match("0x1\n0x2\n", "0xabc\n0xdef\n"));
    }

    #[test]
    fn non_address_differences_do_not_match() {
        assert!(!outputs_match("addr=0x1a2b result=6", "addr=0x1a2b result=5"));
        assert!(!outputs_match("0x1a2b", "1a2b"));
        assert!(!outputs_match("a\n", "a"));
    }

    #[test]
    fn placeholder_text_is_not_an_address() {
        assert!(!outputs_match("x=0x1f", "x=ADDR"));
        assert!(!outputs_match("x=ADDR", "x=0x1f"));
        assert!(outputs_match("x=ADDR", "x=ADDR"));
    }

    #[test]
    fn address_count_must_agree() {
        assert!(!outputs_match("0x1 0x2", "0x1 "));
        assert!(outputs_match("[0x1][0x2]", "[0xa][0xbeef]"));
    }

    #[test]
    fn check_accepts_shifted_addresses() {
        let c = case("addr=0x1a2b result=5", 0);
        assert!(check(&c, &outcome("addr=0xffaa00 result=5", 0)).is_ok());
    }

    #[test]
    fn check_reports_untransformed_outputs() {
        let c = case("addr=0x1a2b result=5", 0);
        let m = check(&c, &outcome("addr=0x1a2b result=6", 0)).unwrap_err();
        assert_eq!(m.actual_stdout, "addr=0x1a2b result=6");
        assert_eq!(m.expected_stdout, "addr=0x1a2b result=5");
        assert!(m.stdout_differs());
        assert!(!m.exit_code_differs());
        assert!(m.to_string().contains("addr=0x1a2b result=6"));
        assert!(!m.to_string().contains(ADDRESS_PLACEHOLDER));
    }

    #[test]
    fn exit_code_is_compared_exactly() {
        let c = case("done\n", 3);
        let m = check(&c, &outcome("done\n", 0)).unwrap_err();
        assert!(!m.stdout_differs());
        assert!(m.exit_code_differs());
        assert_eq!(m.to_string(), "exit code mismatch: expected 3, got 0\n");
    }
}
