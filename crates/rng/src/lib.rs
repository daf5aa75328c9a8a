use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// A source of uniform draws in `[0, 1)`.
///
/// Samplers take `&mut impl UniformSource` so every caller owns its own
/// stream and seeded runs stay reproducible.
pub trait UniformSource {
    fn next_unit(&mut self, ctx: &[u8]) -> f64;
}

/// Deterministic SHAKE256 stream keyed by a byte seed.
#[derive(Clone)]
pub struct OndRng {
    state: [u8; 32],
    step: u64,
}

impl OndRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Independent child stream; the parent is left untouched.
    pub fn fork(&self, label: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[&self.state, &self.step.to_be_bytes(), b"FORK", label], &mut state);
        Self { state, step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn next_u64(&mut self, ctx: &[u8]) -> u64 {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        let mut next_state = self.state;
        shake(&[&state, &step_bytes, b"QSIM"], &mut next_state);
        self.state = next_state;

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);
        u64::from_be_bytes(out)
    }
}

impl UniformSource for OndRng {
    /// Top 53 bits of the next word, so the result never reaches 1.0.
    fn next_unit(&mut self, ctx: &[u8]) -> f64 {
        (self.next_u64(ctx) >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
