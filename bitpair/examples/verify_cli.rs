use bitpair::{StrategySuite, Verification};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Verify adjacent-bit predicate strategies against the reference over [0, bound)")]
struct Cli {
    /// Number of values to sweep, starting at 0
    #[arg(long, default_value_t = 100_000_000)]
    bound: u32,

    /// Run the sweep on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Emit the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let suite = StrategySuite::new();
    let outcome = if cli.parallel {
        suite.verify_parallel(cli.bound)?
    } else {
        suite.verify(cli.bound)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        Verification::Verified { values_checked } => {
            println!("All strategies agree across {values_checked} values");
        }
        Verification::Mismatch(mismatch) => {
            println!("Divergence found: {mismatch}");
        }
    }

    Ok(())
}
