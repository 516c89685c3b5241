//! Legacy Credential Hash CLI
//!
//! A command-line tool for regenerating password hashes of legacy user
//! records.
//!
//! # Commands
//!
//! - `derive` - Derive the replacement hash for a user record
//! - `digest` - Run the bare digest primitive over a message
//! - `benchmark` - Run performance benchmark

use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::time::Instant;

use credhash::{derive_password_hash, digest, Case, CredentialRequest};

#[derive(Parser)]
#[command(name = "credhash")]
#[command(version = "0.1.0")]
#[command(about = "Legacy credential-hash derivation for manual password resets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the replacement hash for a legacy user record
    Derive {
        /// Username of the legacy record
        username: String,

        /// Plaintext password (prompted on stdin if not provided)
        password: Option<String>,

        /// Legacy record identifier
        #[arg(long, default_value = "reset")]
        legacy_id: String,

        /// Emit the report as JSON instead of the operator banner
        #[arg(long)]
        json: bool,
    },

    /// Run the bare digest primitive over a message
    Digest {
        /// Message to digest
        message: String,

        /// Render lowercase hex instead of uppercase
        #[arg(long)]
        lower: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of digests to compute
        #[arg(short, long, default_value = "1000")]
        count: u32,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Derive {
            username,
            password,
            legacy_id,
            json,
        } => cmd_derive(username, password, legacy_id, json).await,
        Commands::Digest { message, lower } => cmd_digest(&message, lower),
        Commands::Benchmark { count } => cmd_benchmark(count).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_derive(
    username: String,
    password: Option<String>,
    legacy_id: String,
    json: bool,
) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p.into_bytes(),
        None => {
            println!("Enter the password to hash:");
            read_raw_line()?
        }
    };

    let request =
        CredentialRequest::from_raw(username.as_bytes(), &password, legacy_id.as_bytes())?;
    let report = derive_password_hash(request).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.report_text());
    }

    Ok(())
}

/// Read one line of raw bytes from stdin. Invalid UTF-8 is kept intact so
/// request validation rejects it instead of coercing it into a
/// plausible-looking but wrong hash.
fn read_raw_line() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().lock().read_until(b'\n', &mut buf)?;
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(buf)
}

fn cmd_digest(message: &str, lower: bool) -> anyhow::Result<()> {
    let case = if lower { Case::Lower } else { Case::Upper };
    println!("{}", digest(message, true, case));
    Ok(())
}

async fn cmd_benchmark(count: u32) -> anyhow::Result<()> {
    println!("Running benchmark with {} digests...", count);

    let start = Instant::now();
    for i in 0..count {
        let _ = digest(&format!("benchmark input {}", i), true, Case::Upper);
    }
    let elapsed = start.elapsed();
    let rate = count as f64 / elapsed.as_secs_f64();

    println!("\nResults:");
    println!("  Total digests: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Rate: {:.2} digests/s", rate);

    let start = Instant::now();
    let _ = credhash::derive("bench", "bench-password", "reset").await;
    println!(
        "  Full derivation: {:.2}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    println!("\nScheme parameters:");
    println!("  Stretch iterations: {}", credhash_core::STRETCH_ITERATIONS);
    println!("  Wide digest rounds: {}", credhash_core::WIDE_DIGEST_ROUNDS);

    Ok(())
}
