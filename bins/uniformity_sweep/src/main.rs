use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use quantum::stats::Significance;
use simulator::{acceptance_rate, uniformity_sweep, write_sweep_csv};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chi-square uniformity sweep of the frequency sampler")]
struct Args {
    /// Smallest register size
    #[arg(long, default_value_t = 1)]
    qubits_min: usize,

    /// Largest register size
    #[arg(long, default_value_t = 8)]
    qubits_max: usize,

    /// Draws per run
    #[arg(long, default_value_t = 10_000)]
    trials: usize,

    /// Independent runs per register size
    #[arg(long, default_value_t = 20)]
    repeats: usize,

    /// Significance level of the goodness-of-fit test
    #[arg(long, value_enum, default_value_t = Level::P05)]
    significance: Level,

    /// Base RNG seed
    #[arg(long, default_value = "uniformity-sweep")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output CSV path
    #[arg(long, default_value = "uniformity_sweep.csv")]
    out: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    P05,
    P01,
    P001,
}

impl From<Level> for Significance {
    fn from(level: Level) -> Self {
        match level {
            Level::P05 => Significance::P05,
            Level::P01 => Significance::P01,
            Level::P001 => Significance::P001,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.qubits_min > args.qubits_max {
        bail!(
            "--qubits-min ({}) must not exceed --qubits-max ({})",
            args.qubits_min,
            args.qubits_max
        );
    }
    if args.repeats == 0 {
        bail!("--repeats must be > 0");
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("building Rayon thread pool")?;
    }

    let significance = Significance::from(args.significance);
    let qubit_counts: Vec<usize> = (args.qubits_min..=args.qubits_max).collect();

    let start = Instant::now();
    let rows = uniformity_sweep(&qubit_counts, args.trials, args.repeats, significance, &args.seed)?;
    info!(
        runs = rows.len(),
        elapsed_s = start.elapsed().as_secs_f64(),
        "sweep finished"
    );

    for &q in &qubit_counts {
        let fallbacks: usize = rows.iter().filter(|r| r.qubits == q).map(|r| r.fallbacks).sum();
        println!(
            "qubits={} accepted={:.3} (expected ~{:.3}) fallbacks={}",
            q,
            acceptance_rate(&rows, q),
            1.0 - significance.alpha(),
            fallbacks
        );
    }

    write_sweep_csv(&args.out, &rows).with_context(|| format!("writing {}", args.out))?;
    Ok(())
}
