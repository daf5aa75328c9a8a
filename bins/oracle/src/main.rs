use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use quantum::{
    leading_outcome,
    render,
    sample_state,
    SamplingConfig,
    DEFAULT_VOCABULARY,
};
use rng::OndRng;
use simulator::{run_session, write_exchange_csv, Party};
use state::StateVector;

/// Sample a prepared state and read the most frequent outcomes as words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// single: one state with its frequency table | session: several parties
    #[arg(long, value_enum, default_value_t = Mode::Single)]
    mode: Mode,

    /// State to prepare
    #[arg(long, value_enum, default_value_t = Prep::Random)]
    state: Prep,

    /// Number of qubits
    #[arg(long, default_value_t = 8)]
    qubits: usize,

    /// Basis index for --state basis
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Draws per sampling run
    #[arg(long, default_value_t = 100)]
    trials: usize,

    /// Outcomes rendered into the message
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Number of parties in session mode
    #[arg(long, default_value_t = 2)]
    parties: usize,

    /// Comma-separated vocabulary (default: built-in 12 words)
    #[arg(long)]
    vocab: Option<String>,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Write the session log as CSV
    #[arg(long)]
    log_csv: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Single,
    Session,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Prep {
    Basis,
    Uniform,
    Ghz,
    Random,
    RandomPhase,
}

fn prepare(args: &Args, rng: &mut OndRng) -> Result<StateVector> {
    let psi = match args.state {
        Prep::Basis => StateVector::basis(args.qubits, args.index),
        Prep::Uniform => StateVector::uniform(args.qubits),
        Prep::Ghz => StateVector::ghz(args.qubits),
        Prep::Random => StateVector::random(args.qubits, rng),
        Prep::RandomPhase => StateVector::random_phase(args.qubits, rng),
    };
    psi.with_context(|| format!("preparing {:?} state on {} qubits", args.state, args.qubits))
}

/// Preparation stream for a session party, kept apart from the stream
/// `run_session` forks for sampling under the same name.
fn prepare_stream(root: &OndRng, party: &str) -> OndRng {
    root.fork(b"prepare").fork(party.as_bytes())
}

fn parse_vocab(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.top_k == 0 {
        bail!("--top-k must be at least 1");
    }

    let vocab = match &args.vocab {
        Some(v) => parse_vocab(v),
        None => DEFAULT_VOCABULARY.iter().map(|w| w.to_string()).collect(),
    };
    let config = SamplingConfig {
        trials: args.trials,
        top_k: args.top_k,
        ..SamplingConfig::default()
    };

    let root = OndRng::new(args.seed.as_bytes());

    match args.mode {
        Mode::Single => {
            let mut prep_rng = root.fork(b"prepare");
            let psi = prepare(&args, &mut prep_rng)?;
            let mut rng = root.fork(b"sample");
            let table = sample_state(&psi, config.trials, &mut rng)?;

            println!("Counts ({} trials):", table.total());
            for (label, count) in table.ranked() {
                println!("  |{}⟩: {} ({:.3})", label, count, table.frequency(label));
            }
            if table.fallbacks() > 0 {
                println!("Fallback draws: {}", table.fallbacks());
            }

            if let Some(leader) = leading_outcome(&table) {
                let word = leader.word(&vocab).unwrap_or_else(|| "-".to_string());
                println!("Leader: {} ({})", leader, word);
            }
            println!("Message: {}", render(&table, &vocab, config.top_k));
        }
        Mode::Session => {
            let mut parties = Vec::with_capacity(args.parties);
            for i in 1..=args.parties {
                let name = format!("vm{}", i);
                let mut prep_rng = prepare_stream(&root, &name);
                parties.push(Party::new(name, prepare(&args, &mut prep_rng)?));
            }

            let log = run_session(&parties, &vocab, &config, &args.seed)?;
            print!("{}", log);

            if let Some((first, rest)) = parties.split_first() {
                for p in rest {
                    let f = first.state.fidelity(&p.state)?;
                    println!("Fidelity({}, {}) = {:.6}", first.name, p.name, f);
                }
            }

            if let Some(path) = &args.log_csv {
                write_exchange_csv(path, &log)
                    .with_context(|| format!("writing session log to {}", path))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rng::UniformSource;

    #[test]
    fn preparation_and_sampling_streams_differ() {
        let root = OndRng::new(b"default-seed");
        let mut prep = prepare_stream(&root, "vm1");
        let mut sample = root.fork(b"vm1");

        let xs: Vec<f64> = (0..8).map(|_| prep.next_unit(b"MEASURE")).collect();
        let ys: Vec<f64> = (0..8).map(|_| sample.next_unit(b"MEASURE")).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn vocab_flag_trims_and_drops_empty_words() {
        assert_eq!(parse_vocab(" a, b ,,c "), vec!["a", "b", "c"]);
    }
}
