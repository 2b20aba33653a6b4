// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use sales_summary::args::Args;
use sales_summary::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::from(2);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let stdout = std::io::stdout();
    match sales_summary::app::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
