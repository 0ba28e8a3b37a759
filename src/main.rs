use anyhow::{Context, Result};
use std::process;
use tracing_subscriber::{EnvFilter, fmt};
use zipdir::commands::{self, Cli, USAGE};
use zipdir::settings::Settings;

/// Entry point for the zip CLI application.
/// Parses command-line arguments, resolves settings and runs the archive pipeline.
fn main() {
    if let Err(e) = try_main() {
        tracing::error!("archiving failed: {e:?}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    tracing::debug!("parsed CLI arguments: {cli:?}");

    if cli.inputs.is_empty() {
        print!("{USAGE}");
        return Ok(());
    }

    let settings = Settings::load().context("Unable to load settings")?;
    let job = cli.into_job(&settings);
    commands::run(&job)?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
