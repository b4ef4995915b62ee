use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use graphite::config::Config;
use graphite::corpus::FileSource;
use graphite::model::{store, TextModel};
use graphite::output::{markdown, terminal};
use graphite::scoring::{classify, similarity_scores, FeatureWeights};

/// Graphite: stylometric authorship attribution.
///
/// Builds statistical fingerprints of text corpora and guesses which of two
/// candidate sources a mystery text most likely derives from.
#[derive(Parser)]
#[command(name = "graphite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build (or extend) a named model from text files and persist it
    Build {
        /// Model name — also the prefix of its persisted table files
        name: String,

        /// Text files to ingest
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Show a persisted model's summary
    Show {
        /// Model name
        name: String,
    },

    /// Print the five-component similarity vector between two models
    Scores {
        /// The model being explained (the query)
        mystery: String,

        /// The candidate source (the reference)
        source: String,
    },

    /// Decide which of two sources a mystery model derives from
    Classify {
        /// The mystery model
        mystery: String,

        /// First candidate source model
        source1: String,

        /// Second candidate source model
        source2: String,

        /// Override feature weights (five comma-separated numbers)
        #[arg(long)]
        weights: Option<String>,

        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("graphite=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Build { name, files } => {
            // Extend an existing model if one is already persisted —
            // accumulation is monotonic, so rebuilding from scratch means
            // deleting the model files first.
            let mut model = if store::model_exists(&name, &config.model_dir) {
                info!(model = %name, "Extending existing model");
                store::load_model(&name, &config.model_dir)?
            } else {
                TextModel::new(&name)
            };

            for file in &files {
                let source = FileSource::new(file);
                model.add_source(&source)?;
                println!("  Ingested {}", source.path().display());
            }

            store::save_model(&model, &config.model_dir)?;
            terminal::display_model(&model);
            println!(
                "\n{}",
                format!("Model saved to {}", config.model_dir.display()).dimmed()
            );
        }

        Commands::Show { name } => {
            let model = store::load_model(&name, &config.model_dir)?;
            terminal::display_model(&model);
        }

        Commands::Scores { mystery, source } => {
            let mystery_model = store::load_model(&mystery, &config.model_dir)?;
            let source_model = store::load_model(&source, &config.model_dir)?;

            let scores = similarity_scores(&mystery_model, &source_model);
            println!();
            terminal::display_scores(source_model.name(), &scores);
            println!(
                "    {:<20} {:>12.4}",
                "weighted sum".dimmed(),
                config.weights.weighted_sum(&scores)
            );
        }

        Commands::Classify {
            mystery,
            source1,
            source2,
            weights,
            report,
        } => {
            let weights = match weights {
                Some(spec) => FeatureWeights::parse(&spec)?,
                None => config.weights.clone(),
            };

            let mystery_model = store::load_model(&mystery, &config.model_dir)?;
            let source1_model = store::load_model(&source1, &config.model_dir)?;
            let source2_model = store::load_model(&source2, &config.model_dir)?;

            let outcome = classify(&mystery_model, &source1_model, &source2_model, &weights);
            terminal::display_classification(&outcome);

            if let Some(path) = report {
                let written = markdown::generate_report(&outcome, &path)?;
                println!("\n{}", format!("Markdown report saved to: {written}").bold());
            }
        }
    }

    Ok(())
}
