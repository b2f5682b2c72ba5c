//! abigen CLI - generate a contract's ABI from its declaration graph
//!
//! Reads a declaration graph (JSON, as emitted by a front end), runs the
//! generator for one contract and writes the interface description.
//!
//! ## Exit codes
//! * 0 - success, possibly with warnings.
//! * 1 - usage / IO / fatal generation error. No output file is written.
//!
//! ## Example
//! ```bash
//! abigen token.decls.json --contract eosio.token -o eosio.token.abi
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use abigen_builder::{generate, AbigenError, GenerationResult, GeneratorConfig, PruneMode};
use abigen_decl::{DeclarationGraph, Location};

#[derive(Parser)]
#[command(name = "abigen")]
#[command(about = "Generate a contract ABI from its declaration graph", long_about = None)]
struct Cli {
    /// Declaration graph (JSON)
    input: PathBuf,
    /// Contract whose actions and tables are collected
    #[arg(short, long)]
    contract: String,
    /// Output file [default: <contract>.abi]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Struct pruning strategy
    #[arg(long, value_enum, default_value_t = PruneArg::SinglePass)]
    prune: PruneArg,
    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PruneArg {
    /// One membership test per collected struct
    SinglePass,
    /// Keep only structs reachable from actions and tables
    Closure,
}

impl From<PruneArg> for PruneMode {
    fn from(arg: PruneArg) -> Self {
        match arg {
            PruneArg::SinglePass => PruneMode::SinglePass,
            PruneArg::Closure => PruneMode::Closure,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        match e.downcast_ref::<AbigenError>() {
            Some(fatal) => eprintln!(
                "{}",
                diagnostic("error", fatal.code(), fatal.location(), fatal)
            ),
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let graph = load_graph(&cli.input)?;
    debug!(declarations = graph.len(), "loaded declaration graph");

    let config = GeneratorConfig::new(&cli.contract).with_prune(cli.prune.into());
    let result = generate(&graph, config)?;
    report_warnings(&result);

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.abi", cli.contract)));
    let json = result
        .abi
        .to_json(!cli.compact)
        .context("Failed to serialize ABI")?;
    fs::write(&out_path, &json)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    println!(
        "✓ {} - {} actions, {} tables, {} structs, {} types ({} warnings)",
        out_path.display(),
        result.abi.actions.len(),
        result.abi.tables.len(),
        result.abi.structs.len(),
        result.abi.typedefs.len(),
        result.warnings.len()
    );
    Ok(())
}

fn load_graph(path: &Path) -> Result<DeclarationGraph> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("Invalid declaration graph in {}", path.display()))
}

fn report_warnings(result: &GenerationResult) {
    for warning in &result.warnings {
        eprintln!(
            "{}",
            diagnostic("warning", warning.code(), warning.location(), warning)
        );
    }
}

/// `error[E-ABI-001] hello.hpp:21:1: message`, or `error[E-ABI-001]: message`
/// when the declaration has no location
fn diagnostic(
    level: &str,
    code: &str,
    location: Option<&Location>,
    message: &dyn std::fmt::Display,
) -> String {
    match location {
        Some(loc) => format!("{level}[{code}] {loc}: {message}"),
        None => format!("{level}[{code}]: {message}"),
    }
}
