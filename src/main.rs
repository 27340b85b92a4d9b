//! Command-line interface for schema-rand
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate a single report
//! schema-rand generate --schema user.json
//!
//! # Generate 100 reports, one JSON document per line
//! schema-rand generate --schema user.yaml --count 100 --output users.jsonl
//!
//! # Show unsupported-tag warnings and malformed-node errors
//! RUST_LOG=warn schema-rand generate --schema user.json
//! ```

use clap::{Parser, Subcommand};
use schema_rand::{run_generate, GenerateArgs};

#[derive(Parser)]
#[command(name = "schema-rand")]
#[command(about = "Generate random values shaped like a schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random values for every key in a schema
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(args)?;
        }
    }

    Ok(())
}
