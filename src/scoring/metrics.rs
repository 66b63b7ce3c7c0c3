use serde::Serialize;

use super::error::ScoreError;

pub const METRIC_COUNT: usize = 9;

pub const METRIC_LABELS: [&str; METRIC_COUNT] = [
    "ROUGE-1(F)",
    "ROUGE-2(F)",
    "ROUGE-L(F)",
    "ROUGE-1(R)",
    "ROUGE-2(R)",
    "ROUGE-L(R)",
    "ROUGE-1(P)",
    "ROUGE-2(P)",
    "ROUGE-L(P)",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Char,
    Word,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Word => "word",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Char => "Character-based ROUGE",
            Self::Word => "Word-based ROUGE",
        }
    }
}

/// F, R and P of ROUGE-1, ROUGE-2 and ROUGE-L, in that order.
///
/// The all-zero vector doubles as the "could not be scored" sentinel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricVector(pub [f64; METRIC_COUNT]);

impl MetricVector {
    pub const ZERO: Self = Self([0.0; METRIC_COUNT]);

    pub fn values(&self) -> &[f64; METRIC_COUNT] {
        &self.0
    }

    /// Best-effort view of a pair outcome: failures become the zero sentinel.
    pub fn from_outcome(outcome: &ScoreOutcome) -> Self {
        outcome.as_ref().copied().unwrap_or(Self::ZERO)
    }
}

pub type ScoreOutcome = Result<MetricVector, ScoreError>;
