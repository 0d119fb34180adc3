//! indemnity - Algerian labor-code allowance lookup
//!
//! Search allowances, read their contribution and tax status, and jump to
//! the cited page of the labor code, in French, Arabic or English.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use indemnity::Result;
use indemnity::app::AppContext;
use indemnity::cli::Cli;
use indemnity::cli::output::{OutputFormat, json_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if wants_json(&cli) {
                // Machine formats: JSON error envelope on stdout
                let payload = serde_json::to_string(&json_error(&e)).unwrap_or_default();
                println!("{payload}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    indemnity::cli::commands::run(&ctx, &cli.command).await
}

/// Only the flag counts here: the context (and its config) may be what failed.
fn wants_json(cli: &Cli) -> bool {
    cli.output_format
        .is_some_and(|format| format.is_machine_readable())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,indemnity=info",
        1 => "info,indemnity=debug",
        2 => "debug,indemnity=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if matches!(cli.output_format, Some(OutputFormat::Json | OutputFormat::Jsonl)) {
        // JSON logging for machine-readable output
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
