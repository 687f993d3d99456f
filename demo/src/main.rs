//! STEELCORE Finance Agent — Demo CLI
//!
//! Wires the real components together (CSV table, audit logger, query
//! router) and exposes three subcommands.
//!
//! Usage:
//!   cargo run -p demo -- demo
//!   cargo run -p demo -- query "how is project alpha doing"
//!   cargo run -p demo -- verify

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use steelcore_agent::FinanceAgent;
use steelcore_audit::{verify_log, AuditLogger};
use steelcore_contracts::{SteelError, SteelResult};
use steelcore_data::load_or_seed;

mod config;
use config::DemoConfig;

// ── CLI definition ────────────────────────────────────────────────────────────

/// STEELCORE — deterministic, fully audited finance queries.
///
/// Every computed answer is appended to a tamper-evident JSONL audit
/// trail; `verify` re-checks the whole trail from its own content hashes.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "STEELCORE finance agent demo",
    long_about = "Runs the STEELCORE finance agent: keyword-routed deterministic queries\n\
                  over a CSV table, with a content-hashed append-only audit trail."
)]
struct Cli {
    /// Optional TOML config with data_path / log_path.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the two canned queries (project lookup, total profit).
    Demo,
    /// Answer one free-text query.
    Query {
        /// The query text, e.g. "what is the total profit".
        text: String,
    },
    /// Re-check every audit entry against its stored content hash.
    Verify,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| match cli.command {
        Command::Demo => run_demo(&config),
        Command::Query { ref text } => run_query(&config, text),
        Command::Verify => run_verify(&config),
    });

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> SteelResult<DemoConfig> {
    match &cli.config {
        Some(path) => DemoConfig::load(path),
        None => Ok(DemoConfig::default()),
    }
}

fn build_agent(config: &DemoConfig) -> SteelResult<FinanceAgent> {
    let table = load_or_seed(&config.data_path)?;
    let auditor = AuditLogger::new(&config.log_path)?;
    Ok(FinanceAgent::new(table, auditor, config.source_name()))
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_demo(config: &DemoConfig) -> SteelResult<()> {
    let agent = build_agent(config)?;

    print_banner();

    for (label, question) in [
        ("Project Lookup", "how is project alpha doing"),
        ("Profit Calculation", "what is the total profit"),
    ] {
        println!("[{}]", label);
        println!("User:  {}", question);
        println!("Agent: {}", agent.process_query(question));
        println!();
    }

    println!(
        "All computations logged to {}",
        config.log_path.display()
    );
    Ok(())
}

fn run_query(config: &DemoConfig, text: &str) -> SteelResult<()> {
    let agent = build_agent(config)?;
    println!("{}", agent.process_query(text));
    Ok(())
}

fn run_verify(config: &DemoConfig) -> SteelResult<()> {
    let report = verify_log(&config.log_path)?;

    println!(
        "{} — created {}, {} entries",
        report.header.system, report.header.timestamp, report.entries
    );

    if report.is_valid() {
        println!("audit trail OK: every entry matches its content hash");
        return Ok(());
    }

    for mismatch in &report.mismatches {
        println!(
            "line {}: stored id {} but content hashes to {}",
            mismatch.line, mismatch.stored, mismatch.computed
        );
    }
    Err(SteelError::LogCorrupted {
        reason: format!("{} entries failed verification", report.mismatches.len()),
    })
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("STEELCORE — Deterministic Finance Agent");
    println!("=======================================");
    println!();
    println!("Per query:");
    println!("  [1] Router classifies by ordered keyword rules (first match wins)");
    println!("  [2] Result computed from the in-memory table, exact Decimal math");
    println!("  [3] Event hashed (SHA-256, sorted keys) and appended to the JSONL trail");
    println!("  [4] Answer returned with its 16-hex-char audit id");
    println!();
}
