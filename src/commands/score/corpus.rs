use anyhow::{Context, Result};

use crate::model::{Corpus, DecodeFile, DecodeRecord, Utterance};

/// Builds a corpus from decoding JSON, keeping the key order of `utts`.
pub fn parse_corpus(raw: &[u8]) -> Result<Corpus> {
    let decode: DecodeFile =
        serde_json::from_slice(raw).context("failed to parse decoding-result json")?;

    let mut utterances = Vec::with_capacity(decode.utts.len());
    for (id, value) in decode.utts {
        let record: DecodeRecord = serde_json::from_value(value)
            .with_context(|| format!("invalid decoding record for utterance {id}"))?;
        let candidate = record
            .output
            .into_iter()
            .next()
            .with_context(|| format!("utterance {id} has no output candidates"))?;

        utterances.push(Utterance {
            id,
            hypothesis: candidate.rec_text,
            reference: candidate.text,
        });
    }

    Ok(Corpus { utterances })
}
