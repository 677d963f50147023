//! hn-harvest main entry point
//!
//! Command-line interface for the recurring-thread comment harvester.

use clap::Parser;
use hn_harvest::config::load_config_with_hash;
use hn_harvest::harvest::run_harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// hn-harvest: recurring-thread comment harvester
///
/// Walks a submitter's listing pages, extracts top-level comments from
/// recent monthly threads, and appends them as JSONL records.
#[derive(Parser, Debug)]
#[command(name = "hn-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Harvests recurring monthly thread comments", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the harvest plan without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let stats = run_harvest(&config).await?;

    println!(
        "Saved {} comments from {} threads to {}.",
        stats.records_written, stats.threads_discovered, config.output.records_path
    );

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("hn_harvest=info,warn"),
            1 => EnvFilter::new("hn_harvest=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints the harvest plan without touching the network
fn handle_dry_run(config: &hn_harvest::Config) {
    println!("=== hn-harvest Dry Run ===\n");

    println!("Source:");
    println!("  Base URL: {}", config.source.base_url);
    println!("  Submitter: {}", config.source.submitter);
    println!("  Thread marker: {:?}", config.source.thread_marker);

    println!("\nRecency window: {} year(s)", config.window.years);

    println!("\nFetch:");
    println!("  Max attempts: {}", config.fetch.max_attempts);
    println!("  Backoff base: {}s", config.fetch.backoff_base_secs);
    println!("  Page delay: {}s", config.fetch.page_delay_secs);
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!(
        "  Proxy: {}",
        if config.proxy.is_some() {
            "configured"
        } else {
            "none"
        }
    );

    println!("\nOutput:");
    println!("  Records: {}", config.output.records_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start from {}submitted?id={}",
        config.source.base_url, config.source.submitter
    );
}
