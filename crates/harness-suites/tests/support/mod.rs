//! Utilidades compartidas: árbol de fixtures en un tempdir y un toolchain
//! falso donde los programas `.wacc` son scripts de shell.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use harness_core::{CommandSpec, ProcessRunner, Toolchain};

pub fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create fixture dir");
    }
    std::fs::write(&path, content).expect("write fixture");
    path
}

/// compile/assemble copian; emulate ejecuta el binario con `sh`.
pub fn shell_toolchain(timeout: Duration) -> Toolchain {
    let copy = |stage: &str| CommandSpec::new("sh").args(["-c", "cp \"$3\" \"$2\"", stage]);
    let emulator = CommandSpec::new("sh").args(["-c", "exec sh \"$1\"", "emulate"]);
    Toolchain::new(copy("compile"), copy("assemble"), emulator, ProcessRunner::new(timeout))
}

/// Punto de entrada opaco del harness por categorías: `sh <file>`.
pub fn shell_compile_entry() -> CommandSpec {
    CommandSpec::new("sh")
}
