use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use telo_report::cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("telo_report=debug,info")
    } else {
        EnvFilter::new("telo_report=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(cli::exit_status(&err))
        }
    }
}
