//! Timed verification sweep over a large prefix of the 32-bit domain
//!
//! Usage: `cargo run --release --example exhaustive_check [bound]`

use std::time::Instant;

use bitpair::{StrategySuite, Verification};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bound: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u32>())
        .transpose()?
        .unwrap_or(1_000_000_000);

    println!("Building lookup tables...");
    let build_start = Instant::now();
    let suite = StrategySuite::new();
    println!("Tables built in {:.3}s", build_start.elapsed().as_secs_f64());

    println!("\nSweeping [0, {bound}) across all strategies...");
    let sweep_start = Instant::now();
    let outcome = suite.verify_parallel(bound)?;
    let duration = sweep_start.elapsed();

    match outcome {
        Verification::Verified { values_checked } => {
            println!("All strategies agree across {values_checked} values");
            println!("Sweep completed in {:.3}s", duration.as_secs_f64());
            println!(
                "Throughput: {:.1}M values/s",
                values_checked as f64 / duration.as_secs_f64() / 1_000_000.0
            );
        }
        Verification::Mismatch(mismatch) => {
            println!("Divergence found: {mismatch}");
        }
    }

    Ok(())
}
