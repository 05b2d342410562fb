//! listing-parser: extract business listing details from listing pages

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use listing_parser::config::ScrapeConfig;
use listing_parser::extractors::extract_listing_from_html;
use listing_parser::fetch::HttpSource;
use listing_parser::report::{write_report, OutputFormat};
use listing_parser::runner::{collect_links, run_listings, ListingOutcome, OutcomeResult};

#[derive(Parser)]
#[command(name = "listing-parser")]
#[command(about = "Extract name, address, hours and amenities from business listing pages")]
struct Cli {
    /// Listing URLs to fetch (defaults to the configured listings)
    urls: Vec<String>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Site origin used to qualify relative links
    #[arg(long)]
    base_url: Option<String>,

    /// Parse a saved listing page instead of fetching (repeatable)
    #[arg(long = "file")]
    files: Vec<PathBuf>,

    /// Ask for more listing links before processing
    #[arg(short, long)]
    interactive: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("listing_parser=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut outcomes = Vec::new();

    for path in &cli.files {
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        outcomes.push(ListingOutcome {
            url: path.display().to_string(),
            result: OutcomeResult::Listing(extract_listing_from_html(&html, &config.base_url)),
        });
    }

    let source = HttpSource::new(&config);
    let mut links = if !cli.urls.is_empty() {
        cli.urls.clone()
    } else if cli.files.is_empty() {
        config.listings.clone()
    } else {
        Vec::new()
    };

    if cli.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut prompt_out = io::stdout();
        collect_links(&mut input, &mut prompt_out, &source, &mut links)
            .context("collecting listing links")?;
    }

    info!(listings = links.len(), files = cli.files.len(), "processing");
    outcomes.extend(run_listings(&links, &source, &config.base_url));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &outcomes, cli.format).context("writing report")?;
    out.flush()?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<ScrapeConfig> {
    let mut config = match &cli.config {
        Some(path) => ScrapeConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScrapeConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(user_agent) = &cli.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}
