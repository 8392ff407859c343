//! wordnet CLI: shortest ancestral paths and outcasts over a noun taxonomy.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rayon::prelude::*;

use wordnet_sap::config::WordNetConfig;
use wordnet_sap::error::{ParseError, WordNetError};
use wordnet_sap::graph::Sap;
use wordnet_sap::outcast::Outcast;
use wordnet_sap::wordnet::{WordNet, parse};

#[derive(Parser)]
#[command(name = "wordnet", version, about = "Semantic relatedness over a noun taxonomy")]
struct Cli {
    /// TOML config file naming the input files.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Synsets file (overrides the config).
    #[arg(long, global = true)]
    synsets: Option<PathBuf>,

    /// Hypernyms file (overrides the config).
    #[arg(long, global = true)]
    hypernyms: Option<PathBuf>,

    /// Skip the acyclic / single-root check.
    #[arg(long, global = true)]
    no_validate: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show synset, noun, and edge counts.
    Info,

    /// List every noun, sorted.
    Nouns,

    /// SAP distance between two nouns.
    Distance { noun_a: String, noun_b: String },

    /// Common-ancestor synset of two nouns on a shortest ancestral path.
    Ancestor { noun_a: String, noun_b: String },

    /// Synsets along a shortest ancestral path between two nouns.
    Path { noun_a: String, noun_b: String },

    /// Find the outcast in each word-list file.
    Outcast {
        /// Files of whitespace-separated nouns.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Read vertex id pairs from stdin and print length and ancestor for each.
    Sap {
        /// Query a bare digraph file (`V`, `E`, then `v w` pairs) instead of
        /// the synsets/hypernyms taxonomy.
        #[arg(long)]
        digraph: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let load = || WordNet::from_config(&config);

    match cli.command {
        Commands::Info => {
            let wordnet = load()?;
            let graph = wordnet.sap_engine().graph();
            if cli.json {
                let info = serde_json::json!({
                    "synsets": wordnet.synset_count(),
                    "nouns": wordnet.index().noun_count(),
                    "edges": graph.edge_count(),
                    "root": wordnet.root(),
                });
                println!("{}", serde_json::to_string_pretty(&info).into_diagnostic()?);
            } else {
                println!("Synsets: {}", wordnet.synset_count());
                println!("Nouns:   {}", wordnet.index().noun_count());
                println!("Edges:   {}", graph.edge_count());
                match wordnet.root() {
                    Some(root) => println!("Root:    {root} ({})", wordnet.word_of(root)?),
                    None => println!("Root:    (not validated)"),
                }
            }
        }

        Commands::Nouns => {
            let wordnet = load()?;
            for noun in wordnet.nouns() {
                println!("{noun}");
            }
        }

        Commands::Distance { noun_a, noun_b } => {
            let wordnet = load()?;
            let distance = wordnet.distance(&noun_a, &noun_b)?;
            if cli.json {
                let out = serde_json::json!({
                    "a": noun_a,
                    "b": noun_b,
                    "distance": distance,
                });
                println!("{out}");
            } else {
                println!("{}", distance.map_or(-1, |d| d as i64));
            }
        }

        Commands::Ancestor { noun_a, noun_b } => {
            let wordnet = load()?;
            let found = wordnet.common_ancestor(&noun_a, &noun_b)?;
            if cli.json {
                let out = serde_json::json!({
                    "a": noun_a,
                    "b": noun_b,
                    "ancestor": found.as_ref().map(|(p, _)| p.ancestor),
                    "label": found.as_ref().map(|(_, label)| label),
                    "distance": found.as_ref().map(|(p, _)| p.length),
                });
                println!("{out}");
            } else {
                match found {
                    Some((_, label)) => println!("{label}"),
                    None => println!("(no common ancestor)"),
                }
            }
        }

        Commands::Path { noun_a, noun_b } => {
            let wordnet = load()?;
            let path = wordnet.path(&noun_a, &noun_b)?;
            if cli.json {
                println!("{}", serde_json::to_string(&path).into_diagnostic()?);
            } else {
                match path {
                    Some(steps) => println!("{}", steps.join(" -> ")),
                    None => println!("(no common ancestor)"),
                }
            }
        }

        Commands::Outcast { files } => {
            let wordnet = load()?;
            let outcast = Outcast::new(&wordnet);
            let results: std::result::Result<Vec<(PathBuf, String)>, WordNetError> = files
                .par_iter()
                .map(|file| -> std::result::Result<(PathBuf, String), WordNetError> {
                    let text = std::fs::read_to_string(file).map_err(|e| ParseError::Io {
                        path: file.display().to_string(),
                        source: e,
                    })?;
                    let nouns: Vec<&str> = text.split_whitespace().collect();
                    let word = outcast.outcast(&nouns)?.to_string();
                    Ok((file.clone(), word))
                })
                .collect();
            for (file, word) in results? {
                if cli.json {
                    let out = serde_json::json!({ "file": file, "outcast": word });
                    println!("{out}");
                } else {
                    println!("{}: {word}", file.display());
                }
            }
        }

        Commands::Sap { digraph } => {
            let sap = match digraph {
                Some(path) => Sap::new(parse::read_digraph(&path).map_err(WordNetError::from)?),
                None => load()?.sap_engine().clone(),
            };
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input).into_diagnostic()?;
            let ids: Vec<usize> = input
                .split_whitespace()
                .map(|tok| tok.parse::<usize>())
                .collect::<std::result::Result<_, _>>()
                .into_diagnostic()?;
            if ids.len() % 2 != 0 {
                tracing::warn!(count = ids.len(), "odd number of vertex ids; last one ignored");
            }
            for pair in ids.chunks_exact(2) {
                let shortest = sap.shortest(pair[0], pair[1]).map_err(WordNetError::from)?;
                if cli.json {
                    let out = serde_json::json!({
                        "v": pair[0],
                        "w": pair[1],
                        "length": shortest.map(|p| p.length),
                        "ancestor": shortest.map(|p| p.ancestor),
                    });
                    println!("{out}");
                } else {
                    let length = shortest.map_or(-1, |p| p.length as i64);
                    let ancestor = shortest.map_or(-1, |p| p.ancestor as i64);
                    println!("length = {length}, ancestor = {ancestor}");
                }
            }
        }
    }

    Ok(())
}

/// Config file first, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<WordNetConfig> {
    let mut config = match &cli.config {
        Some(path) => WordNetConfig::load(path).map_err(WordNetError::from)?,
        None => WordNetConfig::default(),
    };
    if let Some(synsets) = &cli.synsets {
        config.synsets = synsets.clone();
    }
    if let Some(hypernyms) = &cli.hypernyms {
        config.hypernyms = hypernyms.clone();
    }
    if cli.no_validate {
        config.validate = false;
    }
    Ok(config)
}
