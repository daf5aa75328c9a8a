//! Amplitude vectors in the computational basis.
//!
//! A [`StateVector`] is the only input the sampler accepts: it is validated
//! once on construction (non-empty, power-of-two length, normalized) and is
//! immutable afterward. How the amplitudes were produced is not this crate's
//! concern; the constructors in [`prepare`] are hand-built demo states.

pub mod error;
pub mod prepare;
pub mod vector;

pub use error::StateError;
pub use vector::{check_amplitudes, StateVector, C64, NORM_TOLERANCE};
