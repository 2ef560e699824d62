//! Command-line argument definitions for the Scape CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the generator, override generator
//! settings from the configuration file, and control output and logging.

use clap::{Parser, Subcommand};

use scape::generate::GeneratorKind;

/// Command-line arguments for the Scape graph generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the output document (stdout if omitted)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Generator to run
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Grow a random rooted tree
    Tree(GenerateArgs),
    /// Connect nodes with uniformly random edges
    Mesh(GenerateArgs),
}

impl Command {
    /// Returns the generator selected by this command.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Command::Tree(_) => GeneratorKind::Tree,
            Command::Mesh(_) => GeneratorKind::Mesh,
        }
    }

    /// Returns the generation arguments of this command.
    pub fn generate_args(&self) -> &GenerateArgs {
        match self {
            Command::Tree(args) | Command::Mesh(args) => args,
        }
    }
}

/// Settings for a single generation run
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Name of the generated scape
    #[arg(long, default_value = "scape")]
    pub name: String,

    /// Number of nodes to generate
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Id of the HTML element the graph is drawn into
    #[arg(long)]
    pub container: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}
