//! Demo state preparation.
//!
//! These stand in for a circuit backend: each returns an already validated
//! [`StateVector`].

use crate::error::StateError;
use crate::vector::{StateVector, C64};
use rng::UniformSource;

/// Largest register the constructors will allocate (2^24 amplitudes).
pub const MAX_QUBITS: usize = 24;

fn dim(qubits: usize) -> Result<usize, StateError> {
    if qubits > MAX_QUBITS {
        return Err(StateError::TooManyQubits {
            qubits,
            max: MAX_QUBITS,
        });
    }
    Ok(1usize << qubits)
}

impl StateVector {
    /// One-hot state |index⟩.
    pub fn basis(qubits: usize, index: usize) -> Result<Self, StateError> {
        let n = dim(qubits)?;
        if index >= n {
            return Err(StateError::IndexOutOfRange { index, qubits });
        }

        let mut amps = vec![C64::new(0.0, 0.0); n];
        amps[index] = C64::new(1.0, 0.0);
        Self::new(amps)
    }

    /// Equal superposition, H on every qubit.
    pub fn uniform(qubits: usize) -> Result<Self, StateError> {
        let n = dim(qubits)?;
        let a = 1.0 / (n as f64).sqrt();
        Self::new(vec![C64::new(a, 0.0); n])
    }

    /// (|0…0⟩ + |1…1⟩)/√2, H on qubit 0 followed by a CNOT fan-out.
    pub fn ghz(qubits: usize) -> Result<Self, StateError> {
        let n = dim(qubits)?;
        if n == 1 {
            return Self::basis(0, 0);
        }

        let s = 1.0 / 2.0_f64.sqrt();
        let mut amps = vec![C64::new(0.0, 0.0); n];
        amps[0] = C64::new(s, 0.0);
        amps[n - 1] = C64::new(s, 0.0);
        Self::new(amps)
    }

    /// Random complex amplitudes with real and imaginary parts drawn from
    /// `[0, 1)`, then normalized.
    pub fn random<R: UniformSource + ?Sized>(qubits: usize, rng: &mut R) -> Result<Self, StateError> {
        let n = dim(qubits)?;
        let mut amps = Vec::with_capacity(n);
        for _ in 0..n {
            let re = rng.next_unit(b"STATE_RE");
            let im = rng.next_unit(b"STATE_IM");
            amps.push(C64::new(re, im));
        }

        let norm = amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Err(StateError::NotNormalized {
                norm: 0.0,
                tolerance: crate::NORM_TOLERANCE,
            });
        }
        for a in &mut amps {
            *a /= norm;
        }
        Self::new(amps)
    }

    /// H then RZ(θ_q) on every qubit, θ_q uniform in `[0, 2π)`.
    ///
    /// Outcome probabilities are uniform; only the phases are random.
    pub fn random_phase<R: UniformSource + ?Sized>(
        qubits: usize,
        rng: &mut R,
    ) -> Result<Self, StateError> {
        let n = dim(qubits)?;
        let half_angles: Vec<f64> = (0..qubits)
            .map(|_| rng.next_unit(b"RZ") * std::f64::consts::PI)
            .collect();

        let a = 1.0 / (n as f64).sqrt();
        let amps = (0..n)
            .map(|k| {
                // bit q of k selects e^{-iθ/2} (0) or e^{+iθ/2} (1)
                let phase: f64 = half_angles
                    .iter()
                    .enumerate()
                    .map(|(q, &h)| if (k >> q) & 1 == 1 { h } else { -h })
                    .sum();
                C64::from_polar(a, phase)
            })
            .collect();
        Self::new(amps)
    }
}
