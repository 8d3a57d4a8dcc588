//! spam-rs: train on labeled corpora and classify documents
//!
//! # Usage
//!
//! ```bash
//! # Train, run both test sets and print the report
//! spam-rs --config spam-rs.toml evaluate
//!
//! # Same report as JSON
//! spam-rs evaluate --json
//!
//! # Classify individual documents
//! spam-rs classify inbox/1.txt inbox/2.txt
//!
//! # Inspect the trained distributions
//! spam-rs stats --top 20
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use spam_rs::config::Config;
use spam_rs::spam::{FrequencyDistribution, Report, SpamFilter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Word-frequency spam filter", long_about = None)]
struct Cli {
    /// Configuration file (TOML), defaults to ./spam-rs.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop-word list, overrides the configured path
    #[arg(long)]
    stop_words: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train and evaluate against both numbered test sets
    Evaluate {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Train and classify the given documents
    Classify {
        /// Documents to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Train and print the most frequent words of each class
    Stats {
        /// Entries to show per class
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.validate()?;
    if let Some(stop_words) = cli.stop_words {
        config.paths.stop_words = stop_words;
    }
    init_logging(&config);

    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));

    let filter = SpamFilter::train(&config).context("Training failed")?;

    match cli.command {
        Commands::Evaluate { json } => {
            let evaluation = filter
                .evaluate(
                    &config.paths.ham_testing,
                    &config.paths.spam_testing,
                    &config.evaluation,
                )
                .context("Evaluation failed")?;

            let report = Report::new(&evaluation);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report);
            }
        }
        Commands::Classify { files } => {
            for file in &files {
                let verdict = filter
                    .verdict(file)
                    .with_context(|| format!("Failed to classify {}", file.display()))?;
                println!("{}: {}", file.display(), verdict.label());
            }
        }
        Commands::Stats { top } => {
            print_distribution("ham", filter.ham(), top);
            print_distribution("spam", filter.spam(), top);
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spam_rs={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_distribution(name: &str, distribution: &FrequencyDistribution, top: usize) {
    println!(
        "{}: {} words, total count {}",
        name,
        distribution.len(),
        distribution.total()
    );
    println!("{:-<40}", "");
    for (word, count) in distribution.iter().take(top) {
        println!("{:<30} {:>9}", word, count);
    }
    println!();
}
