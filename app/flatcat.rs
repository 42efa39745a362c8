//! Command-line interface for flatcat.
//!
//! Flattens a directory tree into one path-tagged blob on standard output or
//! in a file, and reports run statistics on standard error.

use clap::Parser;
use flatcat::output::{self, OutputTarget};
use flatcat::{Cli, FlatcatError, flatcat};
use std::error::Error;
use std::process::exit;

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {}", err);
            source = err.source();
        }
        exit(1);
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), FlatcatError> {
    let options = cli.options();
    let target = OutputTarget::from(&options);
    let result = flatcat(options)?;

    output::write_result(&result, &target)?;

    if !cli.quiet {
        if let OutputTarget::File(path) = &target {
            eprintln!("Wrote {} files to {}", result.files.len(), path.display());
        }
        eprintln!("{}", output::format_stats(&result.stats, cli.stats));
    }
    Ok(())
}
