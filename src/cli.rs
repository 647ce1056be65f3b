use clap::{Args, Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use stree::config::Config;
use stree::output::{render_to_string, render_tree};
use stree::tree::{SuffixTree, TreeBuilder};

/// stree - build and inspect suffix trees
#[derive(Parser)]
#[command(name = "stree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log progress at info level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log every edge split
    #[arg(long, global = true)]
    debug: bool,
}

/// Where the text comes from
#[derive(Args)]
struct Input {
    /// Text to index
    #[arg(value_name = "TEXT", required_unless_present = "file")]
    text: Option<String>,

    /// Read the text from a file instead (trailing newlines are dropped)
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Sentinel appended to the text (overrides stree.toml)
    #[arg(short, long)]
    sentinel: Option<char>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the suffix tree of a text and print it
    Build {
        #[command(flatten)]
        input: Input,

        /// Write the tree to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out leaf start positions
        #[arg(long)]
        no_indices: bool,
    },

    /// Print every position where a pattern occurs
    Search {
        #[command(flatten)]
        input: Input,

        /// Pattern to look for
        #[arg(short, long)]
        pattern: String,
    },

    /// List every suffix with its start position
    Suffixes {
        #[command(flatten)]
        input: Input,
    },
}

impl Cli {
    pub fn init_logging(&self) {
        let level = if self.debug {
            "trace"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut config = Config::discover()?;
        if let Some(path) = &config.source {
            info!("Using configuration from {:?}", path);
        }

        match self.command {
            Commands::Build {
                input,
                output,
                no_indices,
            } => {
                if no_indices {
                    config.render.show_start_index = false;
                }
                let tree = build_tree(&input, &config)?;
                match output {
                    Some(path) => {
                        render_tree(&tree, &config.render, &path)?;
                        println!("Generated tree at: {:?}", path);
                    }
                    None => print!("{}", render_to_string(&tree, &config.render)),
                }
            }

            Commands::Search { input, pattern } => {
                let tree = build_tree(&input, &config)?;
                let positions = tree.occurrences(&pattern);
                info!("Found {} occurrences of {:?}", positions.len(), pattern);
                for position in positions {
                    println!("{}", position);
                }
            }

            Commands::Suffixes { input } => {
                let tree = build_tree(&input, &config)?;
                for (start, suffix) in tree.suffixes() {
                    println!("{}\t{}", start, suffix);
                }
            }
        }

        Ok(())
    }
}

fn build_tree(input: &Input, config: &Config) -> Result<SuffixTree, Box<dyn std::error::Error>> {
    let text = read_text(input)?;
    let mut build_config = config.build.clone();
    if let Some(sentinel) = input.sentinel {
        build_config = build_config.with_sentinel(sentinel);
    }

    info!(
        "Building suffix tree over {} chars with sentinel {:?}",
        text.chars().count(),
        build_config.sentinel()
    );
    let tree = TreeBuilder::from_config(&build_config).build(&text)?;
    info!(
        "Built {} nodes, {} leaves",
        tree.node_count(),
        tree.leaf_count()
    );

    Ok(tree)
}

fn read_text(input: &Input) -> Result<String, std::io::Error> {
    match (&input.text, &input.file) {
        (_, Some(path)) => read_text_file(path),
        (Some(text), None) => Ok(text.clone()),
        (None, None) => Ok(String::new()),
    }
}

fn read_text_file(path: &Path) -> Result<String, std::io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(content.trim_end_matches(['\n', '\r']).to_string())
}
