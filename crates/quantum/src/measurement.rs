use rng::UniformSource;
use state::StateVector;

/// Cumulative outcome probabilities of a state, built once per sampling run.
#[derive(Clone, Debug)]
pub struct Cdf {
    cumulative: Vec<f64>,
}

/// One sampled basis index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub index: usize,
    /// The uniform value fell past the accumulated total and was clamped to
    /// the last index.
    pub clamped: bool,
}

impl Cdf {
    pub fn from_state(psi: &StateVector) -> Self {
        Self::accumulate(psi.amplitudes().iter().map(|a| a.norm_sqr()))
    }

    fn accumulate(probs: impl Iterator<Item = f64>) -> Self {
        let mut total = 0.0;
        let cumulative = probs
            .map(|p| {
                total += p;
                total
            })
            .collect();
        Self { cumulative }
    }

    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// First index whose cumulative probability reaches `r`.
    pub fn locate(&self, r: f64) -> Draw {
        let idx = self.cumulative.partition_point(|&c| c < r);
        if idx < self.cumulative.len() {
            Draw {
                index: idx,
                clamped: false,
            }
        } else {
            Draw {
                index: self.cumulative.len().saturating_sub(1),
                clamped: true,
            }
        }
    }

    pub fn draw<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Draw {
        self.locate(rng.next_unit(b"MEASURE"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cdf(amps: &[f64], tolerance: f64) -> Cdf {
        let psi = StateVector::with_tolerance(
            amps.iter().map(|&a| state::C64::new(a, 0.0)).collect(),
            tolerance,
        )
        .unwrap();
        Cdf::from_state(&psi)
    }

    #[test]
    fn locate_takes_first_index_reaching_r() {
        let half = 0.5_f64.sqrt();
        let cdf = cdf(&[0.5, 0.5, 0.0, half], 1e-9);

        assert_eq!(cdf.locate(0.1).index, 0);
        assert_eq!(cdf.locate(0.25).index, 0);
        assert_eq!(cdf.locate(0.3).index, 1);
        assert_eq!(cdf.locate(0.5).index, 1);
        assert_eq!(cdf.locate(0.51).index, 3);
        assert!(!cdf.locate(0.99).clamped);
    }

    #[test]
    fn draws_past_total_clamp_to_last_index() {
        let cdf = cdf(&[0.5_f64.sqrt(), 0.4999_f64.sqrt()], 1e-3);

        let d = cdf.locate(0.99995);
        assert_eq!(d, Draw { index: 1, clamped: true });
        assert!((cdf.total() - 0.9999).abs() < 1e-12);
    }
}
