//! Frequency table → human-readable message.

use crate::label::to_index;
use crate::sampler::FrequencyTable;
use std::fmt;

/// Render the `top_k` most frequent outcomes as `"<word>: <count>"` tokens
/// joined by `", "`.
///
/// Ranking is by count descending, then label ascending. Outcomes whose
/// index falls outside `vocabulary` are skipped, so the result may be empty.
pub fn render<S: AsRef<str>>(freqs: &FrequencyTable, vocabulary: &[S], top_k: usize) -> String {
    freqs
        .ranked()
        .into_iter()
        .take(top_k)
        .filter_map(|(label, count)| {
            let word = to_index(label).and_then(|i| vocabulary.get(i))?;
            Some(format!("{}: {}", word.as_ref(), count))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Most frequent outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leader {
    Single(usize),
    /// Indices sharing the top count, ascending.
    Tied(Vec<usize>),
}

impl Leader {
    pub fn indices(&self) -> &[usize] {
        match self {
            Leader::Single(i) => std::slice::from_ref(i),
            Leader::Tied(v) => v,
        }
    }

    /// Vocabulary word for the leader; tied words are joined with `/`.
    /// `None` when no leading index is in range.
    pub fn word<S: AsRef<str>>(&self, vocabulary: &[S]) -> Option<String> {
        let words: Vec<&str> = self
            .indices()
            .iter()
            .filter_map(|&i| vocabulary.get(i).map(|w| w.as_ref()))
            .collect();
        if words.is_empty() {
            None
        } else {
            Some(words.join("/"))
        }
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leader::Single(i) => write!(f, "{}", i),
            Leader::Tied(v) => {
                let parts: Vec<String> = v.iter().map(|i| i.to_string()).collect();
                write!(f, "tie({})", parts.join(", "))
            }
        }
    }
}

pub fn leading_outcome(freqs: &FrequencyTable) -> Option<Leader> {
    let top = freqs.iter().map(|(_, c)| c).max()?;

    // iter() is label-ascending, which for fixed width is index-ascending
    let mut leaders: Vec<usize> = freqs
        .iter()
        .filter(|&(_, c)| c == top)
        .filter_map(|(label, _)| to_index(label))
        .collect();

    match leaders.len() {
        0 => None,
        1 => leaders.pop().map(Leader::Single),
        _ => Some(Leader::Tied(leaders)),
    }
}
