use quantum::{
    sample_state,
    stats::{chi_square, chi_square_critical, Significance},
    SamplingError,
};
use rayon::prelude::*;
use rng::OndRng;
use state::StateVector;
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct SweepRow {
    pub qubits: usize,
    pub repeat: usize,
    pub trials: usize,
    pub chi_square: f64,
    pub critical: f64,
    pub uniform: bool,
    pub fallbacks: usize,
}

fn sweep_point(
    qubits: usize,
    repeat: usize,
    trials: usize,
    significance: Significance,
    seed: &str,
) -> Result<SweepRow, SamplingError> {
    let psi = StateVector::uniform(qubits)?;
    let seed_str = format!("{}-q{}-rep{}", seed, qubits, repeat);
    let mut rng = OndRng::new(seed_str.as_bytes());

    let table = sample_state(&psi, trials, &mut rng)?;
    let outcomes = psi.len();
    let chi2 = chi_square(&table, outcomes);
    let critical = chi_square_critical(outcomes - 1, significance);

    Ok(SweepRow {
        qubits,
        repeat,
        trials,
        chi_square: chi2,
        critical,
        uniform: chi2 <= critical,
        fallbacks: table.fallbacks(),
    })
}

/// Sample the uniform state `repeats` times per qubit count and test each
/// run for uniformity. Every run has its own seeded stream, so the rows do
/// not depend on how rayon schedules them.
pub fn uniformity_sweep(
    qubit_counts: &[usize],
    trials: usize,
    repeats: usize,
    significance: Significance,
    seed: &str,
) -> Result<Vec<SweepRow>, SamplingError> {
    let points: Vec<(usize, usize)> = qubit_counts
        .iter()
        .flat_map(|&q| (0..repeats).map(move |r| (q, r)))
        .collect();

    let rows: Vec<SweepRow> = points
        .into_par_iter()
        .map(|(q, r)| sweep_point(q, r, trials, significance, seed))
        .collect::<Result<_, _>>()?;

    debug!(points = rows.len(), "uniformity sweep complete");
    Ok(rows)
}

/// Fraction of runs at `qubits` that were accepted as uniform.
pub fn acceptance_rate(rows: &[SweepRow], qubits: usize) -> f64 {
    let (accepted, total) = rows
        .iter()
        .filter(|r| r.qubits == qubits)
        .fold((0usize, 0usize), |(a, t), r| (a + r.uniform as usize, t + 1));
    if total == 0 {
        return 0.0;
    }
    accepted as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_is_deterministic_with_seed() {
        let a = uniformity_sweep(&[1, 2, 3], 400, 4, Significance::P01, "seed").unwrap();
        let b = uniformity_sweep(&[1, 2, 3], 400, 4, Significance::P01, "seed").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert_eq!((a[0].qubits, a[0].repeat), (1, 0));
        assert_eq!((a[11].qubits, a[11].repeat), (3, 3));
    }

    #[test]
    fn acceptance_rate_counts_per_qubit_count() {
        let row = |qubits, uniform| SweepRow {
            qubits,
            repeat: 0,
            trials: 10,
            chi_square: 0.0,
            critical: 1.0,
            uniform,
            fallbacks: 0,
        };
        let rows = [row(1, true), row(1, false), row(2, true)];

        assert_eq!(acceptance_rate(&rows, 1), 0.5);
        assert_eq!(acceptance_rate(&rows, 2), 1.0);
        assert_eq!(acceptance_rate(&rows, 5), 0.0);
    }
}
