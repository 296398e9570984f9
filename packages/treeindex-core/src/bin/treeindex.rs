//! Treeindex CLI
//!
//! # Usage
//!
//! ```bash
//! # Build (full rebuild) the index for a repository
//! treeindex build --repo path/to/repo --db .treeindex.db
//!
//! # Run a query method
//! treeindex query getCallHierarchy --params '{"file_path": "cat.rb", "line": 3}'
//!
//! # List query methods
//! treeindex methods
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `info`); results go to stdout as JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use treeindex_core::api::error_response;
use treeindex_core::{IndexBuilder, IndexConfig, MethodRegistry, QueryEngine, SqliteIndexStore};

#[derive(Parser)]
#[command(name = "treeindex")]
#[command(about = "Addressable AST index - build and query", long_about = None)]
struct Cli {
    /// Index database path
    #[arg(long, global = true, default_value = ".treeindex.db")]
    db: PathBuf,

    /// YAML configuration (version: 1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the index from a repository
    Build {
        /// Repository path
        #[arg(short, long)]
        repo: PathBuf,
    },

    /// Run one query method and print its JSON result
    Query {
        /// Method name, e.g. getSymbols
        method: String,

        /// Parameters as a JSON object
        #[arg(short, long, default_value = "{}")]
        params: String,
    },

    /// List registered query methods
    Methods,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { repo } => build(&repo, &cli.db, config),
        Commands::Query { method, params } => query(&cli.db, &config, &method, &params),
        Commands::Methods => {
            print_json(&MethodRegistry::new().describe())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<IndexConfig> {
    match path {
        Some(path) => IndexConfig::from_yaml(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(IndexConfig::default()),
    }
}

fn build(repo: &Path, db: &Path, config: IndexConfig) -> Result<ExitCode> {
    let builder = IndexBuilder::new(config)?;
    let store = SqliteIndexStore::open(db)
        .with_context(|| format!("Failed to open index {}", db.display()))?;

    let report = builder.build(repo, &store)?;
    print_json(&serde_json::to_value(&report)?)?;
    Ok(ExitCode::SUCCESS)
}

fn query(db: &Path, config: &IndexConfig, method: &str, params: &str) -> Result<ExitCode> {
    let params: Value =
        serde_json::from_str(params).context("--params must be a JSON object")?;
    let store = SqliteIndexStore::open(db)
        .with_context(|| format!("Failed to open index {}", db.display()))?;
    let engine = QueryEngine::from_config(Arc::new(store), config);

    match MethodRegistry::new().dispatch(&engine, method, &params) {
        Ok(result) => {
            print_json(&result)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_json(&error_response(&e))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
