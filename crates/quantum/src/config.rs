use state::NORM_TOLERANCE;

pub const DEFAULT_TRIALS: usize = 100;
pub const DEFAULT_TOP_K: usize = 3;

pub const DEFAULT_VOCABULARY: [&str; 12] = [
    "hello",
    "goodbye",
    "yes",
    "no",
    "maybe",
    "please",
    "thank you",
    "sorry",
    "how are you",
    "I am fine",
    "what is your name",
    "my name is",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    /// draws per sampling run
    pub trials: usize,
    /// outcomes rendered into a message
    pub top_k: usize,
    /// allowed deviation of the total probability from 1
    pub tolerance: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            top_k: DEFAULT_TOP_K,
            tolerance: NORM_TOLERANCE,
        }
    }
}
