#![deny(missing_docs)]

//! # Avro OpenAPI CLI
//!
//! Command Line Interface for publishing Avro record schemas as an
//! OpenAPI 2.0 document.
//!
//! Supported Commands:
//! - `generate`: Writes the document to stdout or a file.
//! - `serve`: Hosts the document over HTTP.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod error;
mod generate;
mod logging;
mod manifest;
#[cfg(feature = "server")]
mod serve;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Avro to OpenAPI 2.0 generator")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the OpenAPI 2.0 document described by a manifest.
    Generate(generate::GenerateArgs),
    /// Serve the generated document over HTTP.
    #[cfg(feature = "server")]
    Serve(serve::ServeArgs),
}

fn main() -> CliResult<()> {
    // A missing .env file is not an error.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        #[cfg(feature = "server")]
        Commands::Serve(args) => serve::execute(args)?,
    }

    Ok(())
}
