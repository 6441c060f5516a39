//! CLI entrypoint for `po-fixtures`.

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use tracing_subscriber::EnvFilter;

use po_fixtures::cli::Args;
use po_fixtures::error::FixtureError;
use po_fixtures::output;

fn main() -> Result<(), FixtureError> {
    let args = Args::parse();
    init_tracing(args.is_verbose);
    run(&args)
}

fn run(args: &Args) -> Result<(), FixtureError> {
    let config = args.to_config()?;
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!(seed, entries = config.entries, "generating fixtures");

    let mut rng = Pcg64::seed_from_u64(seed);
    let report = output::write_fixtures(&config, &mut rng)?;

    tracing::info!(
        simple = report.simple_entries,
        plural = report.plural_entries,
        files = report.files.len(),
        "fixtures written"
    );
    Ok(())
}

fn init_tracing(is_verbose: bool) {
    let default_level = if is_verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
