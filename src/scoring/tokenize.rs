use super::error::ScoreError;
use super::metrics::Granularity;
use super::normalize::Normalizer;
use crate::segment::Segmenter;

pub struct Tokenizer<'a> {
    normalizer: &'a Normalizer,
    segmenter: Option<&'a dyn Segmenter>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(normalizer: &'a Normalizer, segmenter: Option<&'a dyn Segmenter>) -> Self {
        Self {
            normalizer,
            segmenter,
        }
    }

    pub fn tokenize(
        &self,
        text: &str,
        is_hypothesis: bool,
        granularity: Granularity,
    ) -> Result<Vec<String>, ScoreError> {
        let normalized = self.normalizer.normalize(text, is_hypothesis);
        match granularity {
            Granularity::Char => Ok(char_tokens(&normalized)),
            Granularity::Word => {
                let segmenter = self.segmenter.ok_or_else(|| {
                    ScoreError::Segmentation("no segmenter configured for word mode".to_string())
                })?;
                word_tokens(segmenter, &normalized)
            }
        }
    }
}

fn char_tokens(normalized: &str) -> Vec<String> {
    normalized
        .chars()
        .filter(|character| *character != ' ')
        .map(String::from)
        .collect()
}

fn word_tokens(segmenter: &dyn Segmenter, normalized: &str) -> Result<Vec<String>, ScoreError> {
    Ok(segmenter
        .segment(normalized)?
        .into_iter()
        .filter(|token| !token.chars().all(|character| character == ' '))
        .collect())
}
