use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use textgraph::config::Config;
use textgraph::input;
use textgraph::output::{json, terminal};
use textgraph::pipeline::{corpus, document::Document};

/// textgraph: connect text files that share enough long words.
///
/// Counts the words of every input file, then links each pair of files that
/// have at least N distinct long words in common.
#[derive(Parser)]
#[command(name = "textgraph", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the similarity graph for a set of text files
    Graph {
        /// Text files to compare (identified by file name)
        files: Vec<PathBuf>,

        /// Existing directory to write graph.json into
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Shared words needed to connect two files (default: 10)
        #[arg(long)]
        threshold: Option<usize>,

        /// Minimum length of a word that counts as shared (default: 5)
        #[arg(long)]
        min_word_len: Option<usize>,

        /// Print up to this many shared words under each edge
        #[arg(long, default_value = "0")]
        show_words: usize,
    },

    /// Show the most frequent words of one text file
    Words {
        /// The file to profile
        file: PathBuf,

        /// How many words to list (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textgraph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Graph {
            files,
            output,
            threshold,
            min_word_len,
            show_words,
        } => {
            let config = Config::load()?;
            let params = config.similarity_params(threshold, min_word_len)?;

            // Every argument problem is reported before any file is read
            let inputs = input::resolve_inputs(&files)?;
            input::require_files(&inputs)?;
            let output_dir = output.or(config.output_dir);
            if let Some(dir) = &output_dir {
                input::require_output_dir(dir)?;
            }

            info!(files = inputs.len(), "Comparing documents");
            // Each file is opened only when its turn comes in the counting loop
            let corpus = corpus::run(inputs.iter().map(input::open_input), params)?;

            terminal::display_graph(&corpus, show_words);

            if let Some(dir) = output_dir {
                let path = json::write_export(&corpus, &dir)?;
                println!("{}", format!("Graph written to {}", path.display()).bold());
            }
        }

        Commands::Words { file, top } => {
            let reader = File::open(&file)
                .map(BufReader::new)
                .with_context(|| format!("Failed to open {}", file.display()))?;
            let id = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            let document = Document::from_reader(id, reader)?;
            terminal::display_profile(&document.id, &document.frequencies, top);
        }
    }

    Ok(())
}
