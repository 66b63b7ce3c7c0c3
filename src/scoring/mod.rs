mod aggregate;
mod classify;
mod error;
mod metrics;
mod normalize;
mod pair;
mod report;
mod rouge;
mod tokenize;

pub use self::aggregate::{AggregateReport, CorpusAggregator};
pub use self::error::ScoreError;
pub use self::metrics::{Granularity, ScoreOutcome};
pub use self::normalize::Normalizer;
pub use self::pair::PairScorer;
pub use self::report::{format_heading, format_report};
pub use self::rouge::NgramRouge;
pub use self::tokenize::Tokenizer;

#[cfg(test)]
pub use self::error::CorpusError;
#[cfg(test)]
pub use self::metrics::MetricVector;
#[cfg(test)]
pub use self::rouge::{Prf, RougeScorer, RougeScores};
