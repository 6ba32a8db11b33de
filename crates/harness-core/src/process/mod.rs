//! Bounded Process Runner: una invocación externa con entrada por stdin y
//! plazo máximo de reloj.

mod command;
mod runner;

pub use command::CommandSpec;
pub use runner::{run_bounded, ProcessOutput, ProcessRunner};
