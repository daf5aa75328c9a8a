//! Goodness of fit against the uniform distribution.

use crate::sampler::FrequencyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    P05,
    P01,
    P001,
}

impl Significance {
    /// Upper-tail standard normal quantile.
    fn z(self) -> f64 {
        match self {
            Significance::P05 => 1.644_853_6,
            Significance::P01 => 2.326_347_9,
            Significance::P001 => 3.090_232_3,
        }
    }

    pub fn alpha(self) -> f64 {
        match self {
            Significance::P05 => 0.05,
            Significance::P01 => 0.01,
            Significance::P001 => 0.001,
        }
    }
}

/// Pearson's statistic for `freqs` against a uniform distribution over
/// `outcomes` labels. Labels that never occurred count as zero.
pub fn chi_square(freqs: &FrequencyTable, outcomes: usize) -> f64 {
    let total = freqs.total();
    if total == 0 || outcomes == 0 {
        return 0.0;
    }

    let expected = total as f64 / outcomes as f64;
    let observed: f64 = freqs
        .iter()
        .map(|(_, c)| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();
    let missing = outcomes.saturating_sub(freqs.len()) as f64;

    observed + missing * expected
}

/// Wilson–Hilferty approximation of the chi-square upper critical value.
pub fn chi_square_critical(dof: usize, significance: Significance) -> f64 {
    if dof == 0 {
        return 0.0;
    }
    let k = dof as f64;
    let c = 2.0 / (9.0 * k);
    k * (1.0 - c + significance.z() * c.sqrt()).powi(3)
}

pub fn is_uniform(freqs: &FrequencyTable, outcomes: usize, significance: Significance) -> bool {
    chi_square(freqs, outcomes) <= chi_square_critical(outcomes.saturating_sub(1), significance)
}
