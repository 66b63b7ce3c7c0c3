use serde::{Deserialize, Serialize};

use crate::scoring::AggregateReport;

#[derive(Debug, Clone, Deserialize)]
pub struct DecodeFile {
    pub utts: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecodeRecord {
    pub output: Vec<DecodeCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecodeCandidate {
    pub rec_text: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub id: String,
    pub hypothesis: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub utterances: Vec<Utterance>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreRunManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub utterance_count: usize,
    pub marker_width: usize,
    pub dictionary: String,
    pub hmm: bool,
    pub reports: Vec<AggregateReport>,
}
