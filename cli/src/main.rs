#![deny(missing_docs)]

//! # Schemadoc CLI
//!
//! Command line front end for the schemadoc document generator.
//!
//! Supported Commands:
//! - `generate`: Merge spec files into one OpenAPI 3 / Swagger 2 document.
//! - `convert`: Turn ORM / document-store metadata into a component schema.
//! - `serve`: Host a generated document as interactive documentation.

use clap::{Parser, Subcommand};
use schemadoc_core::AppResult;
use tracing_subscriber::EnvFilter;

mod convert;
mod generate;
mod output;
#[cfg(feature = "server")]
mod serve;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI / Swagger document generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a document from spec files.
    Generate(generate::GenerateArgs),
    /// Convert model metadata into a schema document.
    Convert(convert::ConvertArgs),
    /// Serve a generated document over HTTP.
    #[cfg(feature = "server")]
    Serve(serve::ServeArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Convert(args) => convert::execute(args),
        #[cfg(feature = "server")]
        Commands::Serve(args) => serve::execute(args),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
