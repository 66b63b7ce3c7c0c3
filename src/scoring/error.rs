use thiserror::Error;

/// Reason a single hypothesis/reference pair could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("hypothesis is empty after tokenization")]
    EmptyHypothesis,
    #[error("reference is empty after tokenization")]
    EmptyReference,
    #[error("segmentation failed: {0}")]
    Segmentation(String),
}

impl ScoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyHypothesis => "empty_hypothesis",
            Self::EmptyReference => "empty_reference",
            Self::Segmentation(_) => "segmentation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("corpus contains no utterances to aggregate")]
    Empty,
    #[error("none of the {failed} utterances could be scored")]
    NoScoredPairs { failed: usize },
}
