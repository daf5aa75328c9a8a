use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("amplitude vector is empty")]
    Empty,

    #[error("amplitude vector length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    #[error("squared magnitudes sum to {norm}, outside tolerance {tolerance} of 1")]
    NotNormalized { norm: f64, tolerance: f64 },

    #[error("basis index {index} out of range for {qubits} qubits")]
    IndexOutOfRange { index: usize, qubits: usize },

    #[error("state sizes differ: {left} vs {right} amplitudes")]
    SizeMismatch { left: usize, right: usize },

    #[error("{qubits} qubits exceeds the supported maximum of {max}")]
    TooManyQubits { qubits: usize, max: usize },
}
