//! Contracts CLI - validate, encode and inspect platform contract payloads.

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod input;
mod logging;
mod output;

use commands::{balance, canonicalize, catalog, compat, validate};

#[derive(Parser)]
#[command(name = "contracts")]
#[command(about = "Validate and encode platform data-contract payloads")]
struct Cli {
    /// Log at debug level unless CONTRACTS_LOG or RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a payload against a contract kind
    Validate {
        /// Contract kind, e.g. journal-entry (see `catalog kinds`)
        kind: String,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a payload and print its wire encoding
    Canonicalize {
        /// Contract kind
        kind: String,
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Emit aliased fields under their field names
        #[arg(long)]
        by_name: bool,
        /// Indented output instead of canonical bytes
        #[arg(long)]
        pretty: bool,
    },
    /// Check that a journal entry's debits equal its credits
    Balance {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if the entry is unbalanced
        #[arg(long)]
        strict: bool,
    },
    /// Check whether two schema versions share a major version
    Compat {
        /// Version of the local schema (must be major.minor)
        version: String,
        /// Version to compare against
        other: String,
    },
    /// Print reference data
    Catalog {
        /// Which catalog to print
        #[arg(value_enum)]
        name: catalog::Catalog,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Validate { kind, input, json } => validate::run(kind, input, json),
        Commands::Canonicalize {
            kind,
            input,
            by_name,
            pretty,
        } => canonicalize::run(kind, input, by_name, pretty),
        Commands::Balance {
            input,
            json,
            strict,
        } => balance::run(input, json, strict),
        Commands::Compat { version, other } => compat::run(version, other),
        Commands::Catalog { name, json } => catalog::run(name, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
