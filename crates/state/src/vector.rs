use crate::error::StateError;
use num_complex::Complex64;

pub type C64 = Complex64;

/// Allowed deviation of the total probability from 1.
pub const NORM_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    amps: Vec<C64>,
    qubits: usize,
}

impl StateVector {
    pub fn new(amps: Vec<C64>) -> Result<Self, StateError> {
        Self::with_tolerance(amps, NORM_TOLERANCE)
    }

    pub fn with_tolerance(amps: Vec<C64>, tolerance: f64) -> Result<Self, StateError> {
        let qubits = check_amplitudes(&amps, tolerance)?;
        Ok(Self { amps, qubits })
    }

    /// Real amplitudes, mostly for hand-written test states.
    pub fn from_real(values: &[f64]) -> Result<Self, StateError> {
        Self::new(values.iter().map(|&v| C64::new(v, 0.0)).collect())
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    pub fn len(&self) -> usize {
        self.amps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amps.is_empty()
    }

    pub fn amplitudes(&self) -> &[C64] {
        &self.amps
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// |⟨self|other⟩|²
    pub fn fidelity(&self, other: &StateVector) -> Result<f64, StateError> {
        if self.len() != other.len() {
            return Err(StateError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        let mut overlap = C64::new(0.0, 0.0);
        for (a, b) in self.amps.iter().zip(&other.amps) {
            overlap += a.conj() * b;
        }
        Ok(overlap.norm_sqr())
    }
}

/// Validate a raw amplitude slice and return its qubit count.
///
/// The vector is never renormalized here: a bad norm points at a bug in
/// whatever prepared the state.
pub fn check_amplitudes(amps: &[C64], tolerance: f64) -> Result<usize, StateError> {
    if amps.is_empty() {
        return Err(StateError::Empty);
    }
    if !amps.len().is_power_of_two() {
        return Err(StateError::NotPowerOfTwo { len: amps.len() });
    }

    let norm: f64 = amps.iter().map(|a| a.norm_sqr()).sum();
    if !norm.is_finite() || (norm - 1.0).abs() > tolerance {
        return Err(StateError::NotNormalized { norm, tolerance });
    }

    Ok(amps.len().trailing_zeros() as usize)
}
