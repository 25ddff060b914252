//! Common test utilities for integration tests

use clap::Parser;
use std::io::Write;
use step_tracker::{
    args::Cli,
    commands::{self, Settings},
    config::AppConfig,
    error::CliResult,
};
use tempfile::NamedTempFile;

/// Write `contents` to a temporary file with the given suffix
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Run the CLI with the given arguments, returning captured stdout
pub fn run_cli(args: &[&str]) -> (CliResult<()>, String) {
    let argv = std::iter::once("step-tracker").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("Failed to parse arguments");
    let config = AppConfig::load(cli.config.as_deref()).expect("Failed to load config");

    let mut out = Vec::new();
    let result = Settings::resolve(&cli, config).and_then(|settings| commands::run(&cli, &settings, &mut out));
    (result, String::from_utf8(out).expect("Output is not UTF-8"))
}
