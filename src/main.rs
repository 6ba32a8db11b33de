use std::process::ExitCode;

use wacc_harness::cli::examples::run_examples;
use wacc_harness::cli::runtime::run_runtime;
use wacc_harness::cli::{parse_args, Command, USAGE};
use wacc_harness::config::AppConfig;
use wacc_harness::errors::AppError;

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(AppError::Usage(msg)) => {
            eprintln!("{msg}");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, AppError> {
    let command = parse_args(args)?;
    let config = AppConfig::from_env()?;
    match command {
        Command::Examples { categories } => {
            let report = run_examples(&config, &categories)?;
            Ok(if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Runtime { path } => {
            let conclusion = run_runtime(&config, &path)?;
            // convención de libtest
            Ok(if conclusion.has_failed() { ExitCode::from(101) } else { ExitCode::SUCCESS })
        }
    }
}
