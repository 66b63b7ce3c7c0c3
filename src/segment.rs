use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jieba_rs::Jieba;
use tracing::info;

use crate::scoring::ScoreError;

/// Dictionary-driven word breaking for text without whitespace word boundaries.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<String>, ScoreError>;
}

pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
    dictionary: String,
}

impl JiebaSegmenter {
    pub fn from_default_dictionary(hmm: bool) -> Self {
        Self {
            jieba: Jieba::new(),
            hmm,
            dictionary: "embedded".to_string(),
        }
    }

    pub fn from_dictionary_file(path: &Path, hmm: bool) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open segmentation dictionary {}", path.display()))?;
        let mut reader = BufReader::new(file);
        let jieba = Jieba::with_dict(&mut reader).map_err(|err| {
            anyhow!(
                "failed to load segmentation dictionary {}: {err:?}",
                path.display()
            )
        })?;

        info!(path = %path.display(), hmm, "loaded segmentation dictionary");
        Ok(Self {
            jieba,
            hmm,
            dictionary: path.display().to_string(),
        })
    }

    pub fn dictionary(&self) -> &str {
        &self.dictionary
    }

    pub fn hmm(&self) -> bool {
        self.hmm
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, ScoreError> {
        Ok(self
            .jieba
            .cut(text, self.hmm)
            .into_iter()
            .map(ToOwned::to_owned)
            .collect())
    }
}
