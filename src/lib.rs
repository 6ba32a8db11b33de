//! WACC harness
//!
//! Este crate actúa como la aplicación de línea de comandos:
//! - Expone `config` para cargar la configuración desde el entorno.
//! - Expone `errors` con los errores de la aplicación.
//! - Expone `cli` con los dos harnesses (categorías y ejecución).

pub mod cli;
pub mod config;
pub mod errors;
