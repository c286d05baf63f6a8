//! Experiment driver for covering array construction.
//!
//! Builds CA(t, k, v) repeatedly at each requested stride and prints the
//! minimum and mean array size per stride.
//!
//! Run with:
//! ```bash
//! cargo run --release --bin ipog -- 2 10 3 --strides 1 2 --runs 1000
//! ```

use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ipog_rs::builder::build;
use ipog_rs::experiment::run_trials;

#[derive(Debug, Parser)]
#[command(author, version, about = "IPOG covering array experiment runner")]
struct Cli {
    /// Strength of the covering array.
    t: usize,

    /// Number of columns.
    k: usize,

    /// Number of values per column.
    v: u32,

    /// Strides to evaluate. Example: `--strides 1 2 4`
    #[arg(short = 'g', long = "strides", num_args = 1.., value_delimiter = ' ', default_value = "1")]
    strides: Vec<usize>,

    /// Builds per stride.
    #[arg(short = 'n', long, default_value = "100")]
    runs: usize,

    /// Base RNG seed; run r uses seed + r.
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Print the first array built at the first stride instead of
    /// gathering statistics.
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print {
        let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
        return match build(cli.t, cli.k, cli.v, cli.strides[0], &mut rng) {
            Ok(ca) => {
                print!("{}", ca);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    for &stride in &cli.strides {
        match run_trials(cli.t, cli.k, cli.v, stride, cli.runs, cli.seed) {
            Ok(stats) => {
                println!(
                    "stride {}: min = {}, mean = {:.2} (over {} runs)",
                    stride, stats.min_rows, stats.mean_rows, stats.runs
                );
            }
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
