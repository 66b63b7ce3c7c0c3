use std::collections::HashSet;

use super::error::ScoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Prf {
    pub f: f64,
    pub p: f64,
    pub r: f64,
}

impl Prf {
    fn from_counts(overlap: usize, candidate_len: usize, reference_len: usize) -> Self {
        let p = ratio(overlap, candidate_len);
        let r = ratio(overlap, reference_len);
        Self {
            f: harmonic_mean(p, r),
            p,
            r,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RougeScores {
    pub rouge_1: Prf,
    pub rouge_2: Prf,
    pub rouge_l: Prf,
}

/// Scores two whitespace-tokenized strings.
pub trait RougeScorer: Send + Sync {
    fn score(&self, hypothesis: &str, reference: &str) -> Result<RougeScores, ScoreError>;
}

/// Distinct n-gram overlap for ROUGE-1/2 and token LCS for ROUGE-L.
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramRouge;

impl RougeScorer for NgramRouge {
    fn score(&self, hypothesis: &str, reference: &str) -> Result<RougeScores, ScoreError> {
        let candidate = hypothesis.split_whitespace().collect::<Vec<&str>>();
        let gold = reference.split_whitespace().collect::<Vec<&str>>();

        if candidate.is_empty() {
            return Err(ScoreError::EmptyHypothesis);
        }
        if gold.is_empty() {
            return Err(ScoreError::EmptyReference);
        }

        Ok(RougeScores {
            rouge_1: rouge_n(&candidate, &gold, 1),
            rouge_2: rouge_n(&candidate, &gold, 2),
            rouge_l: rouge_l(&candidate, &gold),
        })
    }
}

fn ngram_set<'t, 'a>(tokens: &'t [&'a str], n: usize) -> HashSet<&'t [&'a str]> {
    if n == 0 || tokens.len() < n {
        return HashSet::new();
    }
    tokens.windows(n).collect()
}

// Each side's n-grams count once, however often they repeat.
fn rouge_n(candidate: &[&str], reference: &[&str], n: usize) -> Prf {
    let candidate_grams = ngram_set(candidate, n);
    let reference_grams = ngram_set(reference, n);
    let overlap = candidate_grams.intersection(&reference_grams).count();

    Prf::from_counts(overlap, candidate_grams.len(), reference_grams.len())
}

fn rouge_l(candidate: &[&str], reference: &[&str]) -> Prf {
    let lcs = longest_common_subsequence(candidate, reference);
    Prf::from_counts(lcs, candidate.len(), reference.len())
}

fn longest_common_subsequence(a: &[&str], b: &[&str]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Two rolling rows of the (|a|+1) x (|b|+1) table.
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for left in a {
        for (j, right) in b.iter().enumerate() {
            current[j + 1] = if left == right {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn harmonic_mean(p: f64, r: f64) -> f64 {
    if p + r == 0.0 {
        0.0
    } else {
        2.0 * p * r / (p + r)
    }
}
