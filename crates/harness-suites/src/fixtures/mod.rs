//! Fixture Discovery & Dynamic Test Generation.

mod discovery;
mod exit_code;
mod test_case;

pub use discovery::{discover_inputs, discover_programs, generate_test_cases, load_case, InputFixture};
pub use exit_code::parse_exit_code;
pub use test_case::TestCase;
