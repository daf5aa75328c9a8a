pub mod config;
pub mod error;
pub mod exchange;
pub mod label;
pub mod measurement;
pub mod sampler;
pub mod stats;
pub mod symbols;

pub use config::{SamplingConfig, DEFAULT_VOCABULARY};
pub use error::SamplingError;
pub use exchange::{Exchange, ExchangeLog};
pub use sampler::{sample, sample_state, sample_with, FrequencyTable};
pub use symbols::{leading_outcome, render, Leader};
