use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nomen::{extract_named_entities, extract_named_entities_ordered, tokenize};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nomen", version, about = "Capitalized-run named entity extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract named entities from a file, an inline string, or stdin
    Extract {
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
        /// Emit entities in first-occurrence order instead of a sorted set
        #[arg(long)]
        ordered: bool,
    },
    /// Show the tokenization of the input, one token per line with its
    /// capitalization flag
    Tokens {
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct TokenView {
    word: String,
    capitalized: bool,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn read_input(file: Option<PathBuf>, text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read input file {:?}", path));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Extract {
            file,
            text,
            ordered,
        } => {
            let input = read_input(file, text)?;
            if ordered {
                let entities = extract_named_entities_ordered(&input);
                info!(entities = entities.len(), "extraction finished");
                println!("{}", serde_json::to_string_pretty(&entities)?);
            } else {
                let entities = extract_named_entities(&input);
                info!(entities = entities.len(), "extraction finished");
                println!("{}", serde_json::to_string_pretty(&entities)?);
            }
        }
        Commands::Tokens { file, text } => {
            let input = read_input(file, text)?;
            let tokens: Vec<TokenView> = tokenize(&input)
                .into_iter()
                .map(|token| TokenView {
                    capitalized: token.is_capitalized(),
                    word: token.as_str().to_string(),
                })
                .collect();
            info!(tokens = tokens.len(), "tokenization finished");
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
    }

    Ok(())
}
