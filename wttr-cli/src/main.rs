//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and setting up logging
//! - Human-friendly, colorized output formatting
//! - Reporting failures without backtraces

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    let no_color = cmd.no_color;

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            colored::control::set_override(render::stderr_wants_color(no_color));
            for line in render::error_lines(&err) {
                eprintln!("{line}");
            }
            ExitCode::FAILURE
        }
    }
}
