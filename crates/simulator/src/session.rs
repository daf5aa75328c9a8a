use quantum::{sample_state, ExchangeLog, SamplingConfig, SamplingError};
use rng::OndRng;
use state::StateVector;
use tracing::info;

/// A named participant and the state it reads its messages from.
#[derive(Clone, Debug)]
pub struct Party {
    pub name: String,
    pub state: StateVector,
}

impl Party {
    pub fn new(name: impl Into<String>, state: StateVector) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}

/// Sample every party's state once and log the rendered messages.
///
/// Each party draws from its own stream forked from `seed` by name, so the
/// outcome of one party does not depend on the others or on their order.
pub fn run_session<S: AsRef<str>>(
    parties: &[Party],
    vocabulary: &[S],
    config: &SamplingConfig,
    seed: &str,
) -> Result<ExchangeLog, SamplingError> {
    let root = OndRng::new(seed.as_bytes());
    let mut log = ExchangeLog::new();

    for party in parties {
        let mut rng = root.fork(party.name.as_bytes());
        let table = sample_state(&party.state, config.trials, &mut rng)?;
        log.record(party.name.clone(), &table, vocabulary, config.top_k);
    }

    info!(parties = parties.len(), trials = config.trials, "session complete");
    Ok(log)
}
