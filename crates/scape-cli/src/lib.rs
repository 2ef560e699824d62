//! CLI logic for the Scape graph generator.
//!
//! Loads configuration, applies command-line overrides, generates a scape
//! into an in-memory store, and writes the rendered cytoscape document.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, GenerateArgs};

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use scape::{ScapeBuilder, ScapeError, store::MemoryStore};

/// Run the Scape CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ScapeError` for:
/// - Configuration loading errors
/// - Generation errors, such as a size of zero
/// - File I/O errors while writing the document
pub fn run(args: &Args) -> Result<(), ScapeError> {
    let generate = args.command.generate_args();
    let kind = args.command.kind();
    info!(generator:% = kind, name = generate.name.as_str(); "Generating scape");

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, generate);

    let builder = ScapeBuilder::new(app_config);
    let mut store = MemoryStore::new();
    let scape = builder.generate(&mut store, kind, &generate.name)?;
    let text = builder.render(&store, &scape)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &text)?;
            info!(output_file = path.as_str(); "Document written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
    }

    Ok(())
}
