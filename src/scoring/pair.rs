use super::metrics::{Granularity, MetricVector, ScoreOutcome};
use super::rouge::{RougeScorer, RougeScores};
use super::tokenize::Tokenizer;

pub struct PairScorer<'a> {
    tokenizer: Tokenizer<'a>,
    rouge: &'a dyn RougeScorer,
}

impl<'a> PairScorer<'a> {
    pub fn new(tokenizer: Tokenizer<'a>, rouge: &'a dyn RougeScorer) -> Self {
        Self { tokenizer, rouge }
    }

    pub fn try_score(
        &self,
        hypothesis: &str,
        reference: &str,
        granularity: Granularity,
    ) -> ScoreOutcome {
        let hypothesis = self
            .tokenizer
            .tokenize(hypothesis, true, granularity)?
            .join(" ");
        let reference = self
            .tokenizer
            .tokenize(reference, false, granularity)?
            .join(" ");

        let scores = self.rouge.score(&hypothesis, &reference)?;
        Ok(metric_vector(&scores))
    }
}

fn metric_vector(scores: &RougeScores) -> MetricVector {
    let RougeScores {
        rouge_1,
        rouge_2,
        rouge_l,
    } = *scores;
    MetricVector([
        rouge_1.f, rouge_2.f, rouge_l.f, rouge_1.r, rouge_2.r, rouge_l.r, rouge_1.p, rouge_2.p,
        rouge_l.p,
    ])
}

#[cfg(test)]
mod tests {
    use super::PairScorer;
    use crate::scoring::{
        Granularity, MetricVector, NgramRouge, Normalizer, Prf, RougeScorer, RougeScores,
        ScoreError, Tokenizer,
    };

    struct FixedRouge;

    impl RougeScorer for FixedRouge {
        fn score(&self, _: &str, _: &str) -> Result<RougeScores, ScoreError> {
            Ok(RougeScores {
                rouge_1: Prf { f: 0.1, p: 0.2, r: 0.3 },
                rouge_2: Prf { f: 0.4, p: 0.5, r: 0.6 },
                rouge_l: Prf { f: 0.7, p: 0.8, r: 0.9 },
            })
        }
    }

    fn score(
        scorer: &PairScorer<'_>,
        hypothesis: &str,
        reference: &str,
        granularity: Granularity,
    ) -> MetricVector {
        MetricVector::from_outcome(&scorer.try_score(hypothesis, reference, granularity))
    }

    #[test]
    fn exact_match_after_marker_strip_scores_one() {
        let normalizer = Normalizer::default();
        let scorer = PairScorer::new(Tokenizer::new(&normalizer, None), &NgramRouge);
        let vector = score(&scorer, "你好世界XXXXX", "你好世界", Granularity::Char);
        assert_eq!(vector, MetricVector([1.0; 9]));
    }

    #[test]
    fn empty_joined_strings_fall_back_to_zero_vector() {
        let normalizer = Normalizer::default();
        let scorer = PairScorer::new(Tokenizer::new(&normalizer, None), &NgramRouge);

        assert_eq!(
            scorer.try_score("", "abc", Granularity::Char),
            Err(ScoreError::EmptyHypothesis)
        );
        assert_eq!(
            score(&scorer, "", "abc", Granularity::Char),
            MetricVector::ZERO
        );
        assert_eq!(
            score(&scorer, "你好世界XXXXX", "，。", Granularity::Char),
            MetricVector::ZERO
        );
    }

    #[test]
    fn metrics_are_laid_out_f_then_r_then_p() {
        let normalizer = Normalizer::default();
        let scorer = PairScorer::new(Tokenizer::new(&normalizer, None), &FixedRouge);
        let vector = score(&scorer, "abcdefgh", "abc", Granularity::Char);
        assert_eq!(
            vector.values(),
            &[0.1, 0.4, 0.7, 0.3, 0.6, 0.9, 0.2, 0.5, 0.8]
        );
    }

    #[test]
    fn word_mode_without_segmenter_never_panics() {
        let normalizer = Normalizer::default();
        let scorer = PairScorer::new(Tokenizer::new(&normalizer, None), &NgramRouge);
        assert_eq!(
            score(
                &scorer,
                "今天天气很好XXXXX",
                "今天天气很好",
                Granularity::Word
            ),
            MetricVector::ZERO
        );
    }
}
