//! Toolchain falso basado en `sh`: compilar y ensamblar copian el fichero,
//! emular ejecuta el "binario" como script de shell.
#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use harness_core::{CommandSpec, ProcessRunner, Toolchain};

/// `log` recibe, una ruta por línea, los artifacts que produjo cada etapa.
pub fn fake_toolchain(log: &Path, timeout: Duration) -> Toolchain {
    let log = log.display();
    let compiler = CommandSpec::new("sh").args(["-c".to_string(),
                                                format!("echo \"$2\" >> '{log}'; \
                                                         if grep -q COMPILER_HANG \"$3\"; then sleep 30; fi; \
                                                         if grep -q SYNTAX_ERROR \"$3\"; then \
                                                         echo 'syntax error near line 1' >&2; exit 100; fi; \
                                                         cp \"$3\" \"$2\""),
                                                "compile".to_string()]);
    let assembler = CommandSpec::new("sh").args(["-c".to_string(),
                                                 format!("echo \"$2\" >> '{log}'; \
                                                          if grep -q ASM_ERROR \"$3\"; then \
                                                          echo 'unknown instruction' >&2; exit 1; fi; \
                                                          cp \"$3\" \"$2\""),
                                                 "assemble".to_string()]);
    let emulator = CommandSpec::new("sh").args(["-c", "exec sh \"$1\"", "emulate"]);
    Toolchain::new(compiler, assembler, emulator, ProcessRunner::new(timeout))
}

pub fn logged_artifacts(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log).unwrap_or_default()
                                .lines()
                                .map(str::to_string)
                                .collect()
}
