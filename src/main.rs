use clap::Parser;
use std::process;
use taskman::cli::Cli;
use taskman::cli_handlers;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli_handlers::run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
