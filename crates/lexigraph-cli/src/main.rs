//! Lexigraph CLI - word-adjacency queries over a text document.
//!
//! Every command reads the document, builds the adjacency graph, and runs
//! one query against it: a fresh graph per process run, queries read-only
//! thereafter.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Word-adjacency graph queries over a text document.
///
/// Builds a directed graph where words are vertices and consecutive-word
/// adjacencies are weighted edges, then answers bridge-word, expansion,
/// shortest-path, and random-walk queries against it.
#[derive(Parser)]
#[command(name = "lexigraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Display graph information (token and vertex/edge counts)
    Info {
        /// Path to the input document
        file: PathBuf,
    },

    /// Export the graph as Graphviz DOT text
    Export {
        /// Path to the input document
        file: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Query the bridge words between two words
    Bridges {
        /// Path to the input document
        file: PathBuf,

        /// First word
        word1: String,

        /// Second word
        word2: String,
    },

    /// Insert bridge words into a new sentence
    Expand {
        /// Path to the input document
        file: PathBuf,

        /// The sentence to expand
        sentence: String,
    },

    /// Compute shortest paths from one word, to all vertices or to a
    /// second word
    Path {
        /// Path to the input document
        file: PathBuf,

        /// Source word
        word1: String,

        /// Destination word (all vertices if omitted)
        word2: Option<String>,

        /// Write a DOT rendering with the path highlighted
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Random-walk the graph until a repeated edge or dead end
    /// (press Enter to stop early)
    Walk {
        /// Path to the input document
        file: PathBuf,

        /// Write the walked route to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pause between steps in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::info::run(&file, cli.format, cli.quiet),
        Commands::Export { file, output } => commands::export::run(&file, output.as_deref()),
        Commands::Bridges { file, word1, word2 } => {
            commands::bridges::run(&file, &word1, &word2, cli.format, cli.quiet)
        }
        Commands::Expand { file, sentence } => {
            commands::expand::run(&file, &sentence, cli.format, cli.quiet)
        }
        Commands::Path {
            file,
            word1,
            word2,
            dot,
        } => commands::path::run(
            &file,
            &word1,
            word2.as_deref(),
            dot.as_deref(),
            cli.format,
            cli.quiet,
        ),
        Commands::Walk {
            file,
            output,
            delay_ms,
        } => commands::walk::run(&file, output.as_deref(), delay_ms, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
