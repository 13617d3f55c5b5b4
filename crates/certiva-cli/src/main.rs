//! # certiva CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map to a tracing `EnvFilter`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use certiva_cli::admin::{
    run_create, run_delete, run_get, run_list, run_update, CreateArgs, DeleteArgs, GetArgs,
    UpdateArgs,
};
use certiva_cli::login::{run_login, LoginArgs};
use certiva_cli::seeded_registry;
use certiva_cli::verify::{run_scan, run_verify, ScanArgs, VerifyArgs};

/// Certiva — certificate registry and verification demo.
///
/// Operates on an in-process registry seeded with the bundled demo
/// records. State lives for the invocation only; nothing is persisted.
#[derive(Parser, Debug)]
#[command(name = "certiva", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all certificates.
    List,

    /// Show one certificate by id or certificate number.
    Get(GetArgs),

    /// Create a certificate (assigns a fresh id).
    Create(CreateArgs),

    /// Update a certificate by id with a partial patch.
    Update(UpdateArgs),

    /// Delete a certificate by id.
    Delete(DeleteArgs),

    /// Verify a certificate by id or certificate number.
    Verify(VerifyArgs),

    /// Simulate scanning a QR image, then verify the result.
    Scan(ScanArgs),

    /// Exercise the mock admin login gate.
    Login(LoginArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut registry = seeded_registry();
    tracing::debug!(records = registry.len(), "registry seeded");

    let result = match cli.command {
        Commands::List => run_list(&registry),
        Commands::Get(args) => run_get(&args, &registry),
        Commands::Create(args) => run_create(args, &mut registry),
        Commands::Update(args) => run_update(args, &mut registry),
        Commands::Delete(args) => run_delete(&args, &mut registry),
        Commands::Verify(args) => run_verify(&args, &registry),
        Commands::Scan(args) => run_scan(&args, &registry),
        Commands::Login(args) => run_login(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
