//! polescrape CLI
//!
//! Reads a URL list from a spreadsheet, scrapes every studio page plus its
//! workshop sub-pages, and exports the accumulated tables as CSV and/or
//! Excel files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use polescrape::{
    error::Result,
    export::{ExportOptions, export_tables},
    models::Config,
    pipeline::{Selectors, load_urls, run_batch},
    utils::http::HttpFetcher,
};

/// polescrape - Studio Directory Scraper
#[derive(Parser, Debug)]
#[command(name = "polescrape", version, about = "Studio directory batch scraper")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every URL listed in a spreadsheet
    Scrape {
        /// Input spreadsheet (.csv or .xlsx) with a header row
        input: PathBuf,

        /// Name of the column holding the URLs
        #[arg(long, default_value = "URL")]
        column: String,

        /// Process only the first N data rows
        #[arg(long)]
        rows: Option<usize>,

        /// Save the tables as CSV
        #[arg(long)]
        csv: bool,

        /// Save the tables as Excel
        #[arg(long)]
        excel: bool,
    },

    /// Validate configuration and selector fingerprints
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Scrape {
            input,
            column,
            rows,
            csv,
            excel,
        } => {
            config.validate()?;
            let selectors = Selectors::compile(&config)?;

            let urls = load_urls(&input, &column, rows)?;
            log::info!("Loaded {} URLs from {}", urls.len(), input.display());

            let fetcher = HttpFetcher::new(&config.http)?;
            let outcome = run_batch(&fetcher, &selectors, &urls, config.http.request_delay_ms);

            for (kind, count) in outcome.counts() {
                log::info!("{}: {} rows", kind.file_stem(), count);
            }

            let options = ExportOptions { csv, excel };
            if options.any() {
                let written = export_tables(&outcome, &config.export, options)?;
                for path in written {
                    log::info!("Saved {}", path.display());
                }
            } else {
                log::info!("No export format selected; nothing written");
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            Selectors::compile(&config)?;
            log::info!("All validations passed!");
        }
    }

    Ok(())
}
