//! Constantes del harness.
//!
//! Flags fijos de cada herramienta externa y códigos de salida esperados por
//! categoría. Pueden sobreescribirse vía entorno (ver `config`).

/// Extensión de los programas fuente.
pub const SOURCE_EXTENSION: &str = "wacc";

pub const DEFAULT_COMPILE_FLAGS: &[&str] = &["--if=false", "--v=false"];
pub const DEFAULT_ASSEMBLER: &str = "arm-linux-gnueabi-gcc";
pub const DEFAULT_ASSEMBLER_FLAGS: &[&str] = &["-mcpu=arm1176jzf-s", "-mtune=arm1176jzf-s"];
pub const DEFAULT_EMULATOR: &str = "qemu-arm";
pub const DEFAULT_EMULATOR_FLAGS: &[&str] = &["-L", "/usr/arm-linux-gnueabi"];

/// Presupuesto por invocación externa, en segundos.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Token que sustituye a las direcciones `0x…` antes de comparar salidas.
pub const ADDRESS_PLACEHOLDER: &str = "ADDR";

pub const EXIT_VALID: i32 = 0;
pub const EXIT_SYNTAX_ERROR: i32 = 100;
pub const EXIT_SEMANTIC_ERROR: i32 = 200;
