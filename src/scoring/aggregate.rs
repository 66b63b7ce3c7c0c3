use std::collections::BTreeMap;

use serde::Serialize;

use super::error::CorpusError;
use super::metrics::{Granularity, METRIC_COUNT, MetricVector, ScoreOutcome};
use crate::cli::FailurePolicy;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub granularity: Granularity,
    pub failure_policy: String,
    pub means: MetricVector,
    pub utterance_count: usize,
    pub scored_count: usize,
    pub failed_count: usize,
    pub failure_reasons: BTreeMap<String, usize>,
}

/// Per-position arithmetic mean of `vectors`.
pub fn aggregate(vectors: &[MetricVector]) -> Result<MetricVector, CorpusError> {
    if vectors.is_empty() {
        return Err(CorpusError::Empty);
    }

    let mut sums = [0.0_f64; METRIC_COUNT];
    for vector in vectors {
        for (sum, value) in sums.iter_mut().zip(vector.values()) {
            *sum += value;
        }
    }

    let count = vectors.len() as f64;
    Ok(MetricVector(sums.map(|sum| sum / count)))
}

pub struct CorpusAggregator {
    granularity: Granularity,
    policy: FailurePolicy,
    included: Vec<MetricVector>,
    scored_count: usize,
    failure_reasons: BTreeMap<String, usize>,
}

impl CorpusAggregator {
    pub fn new(granularity: Granularity, policy: FailurePolicy) -> Self {
        Self {
            granularity,
            policy,
            included: Vec::new(),
            scored_count: 0,
            failure_reasons: BTreeMap::new(),
        }
    }

    pub fn push(&mut self, outcome: ScoreOutcome) {
        match &outcome {
            Ok(_) => self.scored_count += 1,
            Err(error) => {
                *self
                    .failure_reasons
                    .entry(error.kind().to_string())
                    .or_insert(0) += 1;
                if matches!(self.policy, FailurePolicy::Exclude) {
                    return;
                }
            }
        }
        self.included.push(MetricVector::from_outcome(&outcome));
    }

    pub fn failed_count(&self) -> usize {
        self.failure_reasons.values().sum()
    }

    pub fn finish(self) -> Result<AggregateReport, CorpusError> {
        let failed_count = self.failed_count();
        let utterance_count = self.scored_count + failed_count;
        if utterance_count == 0 {
            return Err(CorpusError::Empty);
        }
        if self.included.is_empty() {
            return Err(CorpusError::NoScoredPairs {
                failed: failed_count,
            });
        }

        let means = aggregate(&self.included)?;
        Ok(AggregateReport {
            granularity: self.granularity,
            failure_policy: self.policy.as_str().to_string(),
            means,
            utterance_count,
            scored_count: self.scored_count,
            failed_count,
            failure_reasons: self.failure_reasons,
        })
    }
}

impl Extend<ScoreOutcome> for CorpusAggregator {
    fn extend<I: IntoIterator<Item = ScoreOutcome>>(&mut self, outcomes: I) {
        for outcome in outcomes {
            self.push(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CorpusAggregator, aggregate};
    use crate::cli::FailurePolicy;
    use crate::scoring::{CorpusError, Granularity, MetricVector, ScoreError};

    fn vector(base: f64) -> MetricVector {
        let mut values = [0.0; 9];
        for (index, value) in values.iter_mut().enumerate() {
            *value = base + index as f64 * 0.01;
        }
        MetricVector(values)
    }

    #[test]
    fn mean_of_one_vector_is_the_vector() {
        let single = vector(0.37);
        assert_eq!(aggregate(&[single]), Ok(single));
    }

    #[test]
    fn mean_is_independent_of_input_order() {
        let forward = vec![vector(0.1), vector(0.5), vector(0.2), MetricVector::ZERO];
        let mut backward = forward.clone();
        backward.reverse();
        let rotated = vec![forward[2], forward[3], forward[0], forward[1]];

        let expected = aggregate(&forward).expect("non-empty input should aggregate");
        for permutation in [backward, rotated] {
            let actual = aggregate(&permutation).expect("non-empty input should aggregate");
            for (left, right) in expected.values().iter().zip(actual.values()) {
                assert!((left - right).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(aggregate(&[]), Err(CorpusError::Empty));
        let aggregator = CorpusAggregator::new(Granularity::Char, FailurePolicy::Include);
        assert_eq!(aggregator.finish(), Err(CorpusError::Empty));
    }

    #[test]
    fn include_policy_counts_failures_as_zero() {
        let mut aggregator = CorpusAggregator::new(Granularity::Char, FailurePolicy::Include);
        aggregator.push(Ok(MetricVector([1.0; 9])));
        aggregator.push(Err(ScoreError::EmptyHypothesis));

        let report = aggregator.finish().expect("report should build");
        assert_eq!(report.means, MetricVector([0.5; 9]));
        assert_eq!(report.utterance_count, 2);
        assert_eq!(report.scored_count, 1);
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.failure_reasons.get("empty_hypothesis"), Some(&1));
        assert_eq!(report.failure_policy, "include");
    }

    #[test]
    fn exclude_policy_drops_failures_from_denominator() {
        let mut aggregator = CorpusAggregator::new(Granularity::Word, FailurePolicy::Exclude);
        aggregator.extend([
            Ok(MetricVector([1.0; 9])),
            Err(ScoreError::EmptyReference),
            Err(ScoreError::EmptyReference),
        ]);

        let report = aggregator.finish().expect("report should build");
        assert_eq!(report.means, MetricVector([1.0; 9]));
        assert_eq!(report.failed_count, 2);
        assert_eq!(report.failure_reasons.get("empty_reference"), Some(&2));
    }

    #[test]
    fn exclude_policy_with_only_failures_is_an_error() {
        let mut aggregator = CorpusAggregator::new(Granularity::Char, FailurePolicy::Exclude);
        aggregator.push(Err(ScoreError::EmptyHypothesis));
        assert_eq!(
            aggregator.finish(),
            Err(CorpusError::NoScoredPairs { failed: 1 })
        );
    }
}
