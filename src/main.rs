use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster::GrowableContainer;
use roster::cli::Args;
use roster::config::Config;
use roster::error::Result;
use roster::input::InputManager;
use roster::output;
use roster::strategy::SortingManager;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

/// Log to stderr; RUST_LOG overrides the verbosity flag
fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("roster=debug")
        } else {
            EnvFilter::new("roster=info")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("roster: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);
    let config = Config::from_args(&args)?;

    let mut input = InputManager::new();
    let mut records = GrowableContainer::new();
    for source in config.sources()? {
        input.set_source(source);
        let loaded = input.load()?;
        records.append_all(&loaded);
    }

    let sorting = SortingManager::with_strategy(config.strategy);
    if config.even_only {
        sorting.sort_even_ids(&mut records)?;
    } else {
        sorting.sort(&mut records)?;
    }
    tracing::info!(
        strategy = %config.strategy.name(),
        even_only = config.even_only,
        count = records.len(),
        "sorted records"
    );

    output::write_records(io::stdout().lock(), &records)?;
    if let Some(path) = &config.output_file {
        output::append_records(path, &records)?;
    }

    Ok(())
}
