use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use docvec::config::Config;
use docvec::corpus::Corpus;
use docvec::output::{self, terminal};
use docvec::pipeline;
use docvec::source;
use docvec::weighting::Weighting;

/// docvec: turn a handful of documents into term vectors, compare them,
/// and classify them from averaged word embeddings.
///
/// Documents are read from DOCVEC_CORPUS_DIR/<DOCVEC_LANGUAGE>/<topic>.txt.
#[derive(Parser)]
#[command(name = "docvec", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top raw-frequency and TF-IDF terms of each document
    Vectorize {
        /// Topics to load (default: a small science corpus)
        topics: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the first document against each of the others
    Similarity {
        /// Topics to load; the first one is the reference
        topics: Vec<String>,

        /// Weighting scheme: raw, tf or tfidf
        #[arg(long, default_value = "tf")]
        weighting: Weighting,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Train embeddings and a classifier, then predict each document's topic
    Classify {
        /// Topics to load; each topic is also its document's label
        topics: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

const VECTORIZE_TOPICS: &[&str] = &[
    "Black hole",
    "Quantum mechanics",
    "Neural network",
    "Data mining",
    "Climate change",
];

const SIMILARITY_TOPICS: &[&str] = &["Black hole", "Neural network", "Climate change"];

const CLASSIFY_TOPICS: &[&str] = &[
    "Galaxy",
    "Natural language processing",
    "Nebula",
    "Logistic regression",
    "Artificial intelligence",
];

fn topics_or_default(topics: Vec<String>, defaults: &[&str]) -> Vec<String> {
    if topics.is_empty() {
        defaults.iter().map(|t| t.to_string()).collect()
    } else {
        topics
    }
}

/// Fetch, tokenize and index the given topics.
async fn load_corpus(config: &Config, topics: &[String], quiet: bool) -> Result<Corpus> {
    let doc_source = config.document_source();
    info!(
        root = %doc_source.root().display(),
        language = doc_source.language(),
        topics = topics.len(),
        "Loading documents"
    );

    let documents = source::load_documents(&doc_source, topics, config.concurrency).await;
    if !quiet {
        println!("{}", "Documents:".bold());
        terminal::display_token_counts(&documents);
    }

    Ok(Corpus::new(documents))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docvec=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Vectorize { topics, json } => {
            let topics = topics_or_default(topics, VECTORIZE_TOPICS);
            let corpus = load_corpus(&config, &topics, json).await?;
            let report = pipeline::vectorize(&corpus, config.top_terms, config.normalization)?;
            if json {
                output::print_json(&report)?;
            } else {
                terminal::display_vectorize(&report);
            }
        }

        Commands::Similarity {
            topics,
            weighting,
            json,
        } => {
            let topics = topics_or_default(topics, SIMILARITY_TOPICS);
            let corpus = load_corpus(&config, &topics, json).await?;
            let report = pipeline::compare(&corpus, weighting, config.normalization)?;
            if json {
                output::print_json(&report)?;
            } else {
                terminal::display_similarity(&report);
            }
        }

        Commands::Classify { topics, json } => {
            let topics = topics_or_default(topics, CLASSIFY_TOPICS);
            let corpus = load_corpus(&config, &topics, json).await?;
            let report = pipeline::classify(
                &corpus,
                &config.embedding_trainer(),
                config.classifier(),
                config.vector_size,
            )?;
            if json {
                output::print_json(&report)?;
            } else {
                terminal::display_classification(&report);
            }
        }
    }

    Ok(())
}
