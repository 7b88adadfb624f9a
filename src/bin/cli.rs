// src/bin/cli.rs

//! Job feed CLI
//!
//! Local execution entry point; one `run` is one feed update.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobfeed::{
    eligibility::{self, Signals},
    error::Result,
    feed::parse_feed,
    models::Config,
    pipeline,
    storage::{FeedStore, LocalFeedStore},
};

/// jobfeed - Workday vacancy RSS builder
#[derive(Parser, Debug)]
#[command(
    name = "jobfeed",
    version,
    about = "Builds an RSS feed of professional vacancies from a Workday career site"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "jobfeed.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch new postings and rewrite the feed
    Run {
        /// Feed file to update (default: feed.output_path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum number of postings to add in this run
        #[arg(long)]
        max_included: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Show information about the existing feed
    Info {
        /// Feed file to inspect (default: feed.output_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how the eligibility policy classifies a text
    Classify {
        /// Text to classify, e.g. a posting title
        text: String,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Run {
            output,
            max_included,
        } => {
            if let Some(output) = output {
                config.feed.output_path = output.display().to_string();
            }
            if let Some(max_included) = max_included {
                config.source.max_included = max_included;
            }

            log::info!("Starting feed update...");
            let store = LocalFeedStore::new(&config.feed.output_path);
            let summary = pipeline::run_pipeline(&config, &store).await?;

            log::info!("Pages fetched: {}", summary.pages_fetched);
            log::info!("Postings processed: {}", summary.processed);
            log::info!("New items included: {}", summary.included);
            log::info!("Items in feed: {}", summary.written);
            log::info!("Done!");
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK ({})", cli.config.display());
        }

        Command::Info { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(&config.feed.output_path));
            let store = LocalFeedStore::new(&path);
            log::info!("Feed file: {}", store.location());

            match store.read().await? {
                Some(xml) => {
                    let parsed = parse_feed(&xml, "")?;
                    log::info!("Items: {}", parsed.items.len());
                    log::info!(
                        "Last generated: {}",
                        parsed.pub_date.as_deref().unwrap_or("unknown")
                    );
                }
                None => log::info!("No feed found yet."),
            }
        }

        Command::Classify { text } => {
            let signals = Signals::from_text(&text);
            let grades: Vec<_> = signals.included_grades.iter().copied().collect();

            println!("normalized:   {}", eligibility::normalize(&text));
            println!("grades:       {}", grades.join(", "));
            println!("excluded:     {}", signals.is_excluded_grade);
            println!("consultant:   {}", signals.is_consultant);
            println!("intern:       {}", signals.is_intern_or_fellowship);
            println!("listing:      {:?}", signals.verdict());
            println!("include:      {}", eligibility::should_include(&text));
        }
    }

    Ok(())
}
