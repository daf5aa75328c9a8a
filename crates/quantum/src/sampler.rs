use crate::config::SamplingConfig;
use crate::error::SamplingError;
use crate::label::{to_index, to_label};
use crate::measurement::Cdf;
use num_complex::Complex64;
use rng::UniformSource;
use state::{StateError, StateVector};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Empirical outcome counts keyed by fixed-width binary label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    width: usize,
    counts: BTreeMap<String, usize>,
    fallbacks: usize,
}

impl FrequencyTable {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Build a table from `(label, count)` pairs. Every label must be a
    /// binary string and all must share one width; repeated labels add up.
    pub fn from_counts<I, S>(counts: I) -> Result<Self, SamplingError>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut table: Option<Self> = None;
        for (label, count) in counts {
            let label = label.into();
            if to_index(&label).is_none() {
                return Err(SamplingError::InvalidLabel { label });
            }

            let t = table.get_or_insert_with(|| Self::new(label.len()));
            if label.len() != t.width {
                return Err(SamplingError::LabelWidthMismatch {
                    expected: t.width,
                    found: label.len(),
                    label,
                });
            }
            *t.counts.entry(label).or_insert(0) += count;
        }
        Ok(table.unwrap_or_default())
    }

    fn record(&mut self, index: usize) {
        *self.counts.entry(to_label(index, self.width)).or_insert(0) += 1;
    }

    /// Label width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Draws that landed past the accumulated probability and were clamped
    /// to the last index.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    pub fn frequency(&self, label: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(label) as f64 / total as f64
    }

    /// Entries in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(l, &c)| (l.as_str(), c))
    }

    /// Entries by count descending, ties by ascending label.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

/// Sample `trials` computational-basis outcomes from raw amplitudes.
///
/// The vector is validated first and never renormalized.
pub fn sample<R: UniformSource + ?Sized>(
    amplitudes: &[Complex64],
    trials: usize,
    rng: &mut R,
) -> Result<FrequencyTable, SamplingError> {
    let psi = validated(StateVector::new(amplitudes.to_vec()))?;
    sample_state(&psi, trials, rng)
}

/// [`sample`] with trial count and tolerance taken from `config`.
pub fn sample_with<R: UniformSource + ?Sized>(
    amplitudes: &[Complex64],
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<FrequencyTable, SamplingError> {
    let psi = validated(StateVector::with_tolerance(
        amplitudes.to_vec(),
        config.tolerance,
    ))?;
    sample_state(&psi, config.trials, rng)
}

fn validated(psi: Result<StateVector, StateError>) -> Result<StateVector, SamplingError> {
    psi.map_err(|e| {
        warn!(error = %e, "rejected amplitude vector");
        SamplingError::State(e)
    })
}

pub fn sample_state<R: UniformSource + ?Sized>(
    psi: &StateVector,
    trials: usize,
    rng: &mut R,
) -> Result<FrequencyTable, SamplingError> {
    if trials == 0 {
        return Err(SamplingError::ZeroTrials);
    }

    let cdf = Cdf::from_state(psi);
    let mut table = FrequencyTable::new(psi.qubits());

    for _ in 0..trials {
        let draw = cdf.draw(rng);
        if draw.clamped {
            table.fallbacks += 1;
            warn!(
                total = cdf.total(),
                index = draw.index,
                "uniform draw exceeded accumulated probability, using last outcome"
            );
        }
        table.record(draw.index);
    }

    debug!(
        qubits = psi.qubits(),
        trials,
        distinct = table.len(),
        fallbacks = table.fallbacks,
        "sampling run complete"
    );
    Ok(table)
}
