use state::StateError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("invalid amplitude vector: {0}")]
    State(#[from] StateError),

    #[error("trial count must be at least 1")]
    ZeroTrials,

    #[error("outcome label {label:?} is not a binary string")]
    InvalidLabel { label: String },

    #[error("outcome label {label:?} has width {found}, table width is {expected}")]
    LabelWidthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },
}
