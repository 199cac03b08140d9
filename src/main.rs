//! CLI entry point for the optical-art pattern generator

use clap::Parser;
use op_art::io::cli::{Cli, PatternRunner};
use op_art::io::notification::Notifier;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let mut notifier = Notifier::new();
    let mut runner = PatternRunner::new(cli);
    let outcome = runner.run(&mut notifier);
    if notifier.report(outcome).is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_tracing(quiet: bool) {
    let default_level = if quiet { Level::WARN } else { Level::INFO };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}
