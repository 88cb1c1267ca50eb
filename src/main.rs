use std::process::ExitCode;

use clap::Parser;
use lingua::cli::{Arguments, ExitStatus};
use tracing::Level;

fn main() -> ExitCode {
    let args = Arguments::parse();

    let level = if args.verbose() {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match lingua::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
