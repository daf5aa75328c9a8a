//! Caller-owned record of rendered messages.

use crate::sampler::FrequencyTable;
use crate::symbols::{leading_outcome, render, Leader};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub seq: usize,
    pub party: String,
    pub trials: usize,
    pub leader: Option<Leader>,
    pub message: String,
    /// Wall-clock time of recording, nanoseconds since the Unix epoch.
    pub recorded_at_ns: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ExchangeLog {
    entries: Vec<Exchange>,
}

impl ExchangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `table` for `party` and append the result.
    pub fn record<S: AsRef<str>>(
        &mut self,
        party: impl Into<String>,
        table: &FrequencyTable,
        vocabulary: &[S],
        top_k: usize,
    ) -> &Exchange {
        let entry = Exchange {
            seq: self.entries.len(),
            party: party.into(),
            trials: table.total(),
            leader: leading_outcome(table),
            message: render(table, vocabulary, top_k),
            recorded_at_ns: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
        };
        debug!(seq = entry.seq, party = %entry.party, message = %entry.message, "exchange recorded");

        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[Exchange] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_party<'a>(&'a self, party: &'a str) -> impl Iterator<Item = &'a Exchange> + 'a {
        self.entries.iter().filter(move |e| e.party == party)
    }
}

impl fmt::Display for ExchangeLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            let leader = e
                .leader
                .as_ref()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "#{} {} (trials = {}, leader = {}): {}",
                e.seq, e.party, e.trials, leader, e.message
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_with_sequence_numbers() {
        let vocab = ["a", "b", "c"];
        let t1 = FrequencyTable::from_counts([("00", 4), ("01", 1)]).unwrap();
        let t2 = FrequencyTable::from_counts([("01", 2), ("10", 2)]).unwrap();

        let mut log = ExchangeLog::new();
        assert!(log.is_empty());

        log.record("vm1", &t1, &vocab, 3);
        let second = log.record("vm2", &t2, &vocab, 3).clone();

        assert_eq!(log.len(), 2);
        assert_eq!(second.seq, 1);
        assert_eq!(second.message, "b: 2, c: 2");
        assert_eq!(second.leader, Some(Leader::Tied(vec![1, 2])));

        let first = &log.entries()[0];
        assert_eq!(first.trials, 5);
        assert_eq!(first.message, "a: 4, b: 1");
        assert_eq!(log.for_party("vm1").count(), 1);
        assert_eq!(log.for_party("nobody").count(), 0);
        assert!(first.recorded_at_ns > 0);
        assert!(second.recorded_at_ns >= first.recorded_at_ns);

        let text = log.to_string();
        assert!(text.contains("#1 vm2 (trials = 4, leader = tie(1, 2)): b: 2, c: 2"));
    }
}
