use std::error::Error;
use std::io;

use blowup::cli::{Cli, Engine};
use blowup::harness::{self, DEFAULT_SIZES, PATTERN};
use blowup::{Builder, Matcher, MonotonicClock};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // The table goes to stdout, diagnostics to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let builder = Builder::new(PATTERN).step_limit(cli.step_limit);
    let matcher: Box<dyn Matcher> = match cli.engine {
        Engine::Backtrack => Box::new(builder.backtrack()?),
        Engine::Linear => Box::new(builder.linear()?),
    };
    info!(pattern = PATTERN, engine = ?cli.engine, "engine ready");

    let clock = MonotonicClock::new();
    let stdout = io::stdout().lock();
    if let Err(e) = harness::run(matcher.as_ref(), &clock, DEFAULT_SIZES, stdout) {
        error!("{e}");
        return Err(e.into());
    }
    Ok(())
}
