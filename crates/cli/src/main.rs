//! Jordbruk CLI - command-line access to the SSB agriculture codelists
//!
//! Usage:
//!   jordbruk                          - Show a codelist summary
//!   jordbruk codes list               - List code values
//!   jordbruk codes show <code>        - Show one code in full
//!   jordbruk codes chain <code>       - Show a replacement chain
//!   jordbruk categories               - List categories with counts
//!   jordbruk export --format yaml     - Export the codelist manifest

mod commands;

use clap::{Parser, Subcommand};
use commands::{CategoriesCommand, CodesCommand, ExportCommand};
use ssb_jordbruk_fagfunksjoner::{KodelisteLoader, Produksjonstilskudd};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jordbruk")]
#[command(about = "Jordbruk - SSB production subsidy codelists")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load supplementary codelist documents from this directory
    #[arg(long, global = true)]
    codelist_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse produksjonskoder
    Codes(CodesCommand),
    /// List categories with code counts
    Categories(CategoriesCommand),
    /// Export the full codelist as a manifest
    Export(ExportCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut registry = Produksjonstilskudd::new();
    if let Some(dir) = &cli.codelist_dir {
        let mut loader = KodelisteLoader::new();
        let loaded = loader.load_from_directory(dir)?;
        loader.apply_to(&mut registry)?;
        tracing::info!(count = loaded, dir = %dir.display(), "loaded supplementary codelists");
    }

    match cli.command {
        Some(Commands::Codes(cmd)) => cmd.run(&registry, cli.json),
        Some(Commands::Categories(cmd)) => cmd.run(&registry, cli.json),
        Some(Commands::Export(cmd)) => cmd.run(&registry),
        None => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&registry.summary())?);
            } else {
                println!("{}", registry);
            }
            Ok(())
        }
    }
}
