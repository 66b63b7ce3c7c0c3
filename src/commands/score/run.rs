use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::{info, warn};

use super::corpus::parse_corpus;
use crate::cli::{FailurePolicy, GranularitySelection, ScoreArgs};
use crate::model::{Corpus, ScoreRunManifest};
use crate::scoring::{
    AggregateReport, CorpusAggregator, Granularity, NgramRouge, Normalizer, PairScorer,
    ScoreOutcome, Tokenizer, format_heading, format_report,
};
use crate::segment::{JiebaSegmenter, Segmenter};
use crate::util::{now_utc_string, read_file, sha256_bytes, write_json_pretty};

pub fn run(args: ScoreArgs) -> Result<()> {
    let segmenter = if args.granularity.wants_word() {
        Some(build_segmenter(&args)?)
    } else {
        None
    };
    let normalizer = Normalizer::with_marker_width(args.marker_width);
    let rouge = NgramRouge;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.jobs.max(1))
        .build()
        .context("failed to build scoring thread pool")?;

    info!(path = %args.decode_path.display(), "loading decoding results");
    let raw = read_file(&args.decode_path)?;
    let corpus = parse_corpus(&raw)
        .with_context(|| format!("failed to load {}", args.decode_path.display()))?;
    if corpus.is_empty() {
        bail!("no utterances found in {}", args.decode_path.display());
    }
    info!(
        utterances = corpus.len(),
        marker = %normalizer.marker_description(),
        jobs = args.jobs.max(1),
        "loaded decoding results"
    );

    let tokenizer = Tokenizer::new(
        &normalizer,
        segmenter
            .as_ref()
            .map(|segmenter| segmenter as &dyn Segmenter),
    );
    let scorer = PairScorer::new(tokenizer, &rouge);

    let mut reports = Vec::new();
    for granularity in requested_granularities(args.granularity) {
        let report = score_corpus(&pool, &scorer, &corpus, granularity, args.failure_policy)?;
        if report.failed_count > 0 {
            warn!(
                granularity = granularity.as_str(),
                failed = report.failed_count,
                policy = report.failure_policy.as_str(),
                "some utterances could not be scored"
            );
        }
        reports.push(report);
    }

    write_reports(&reports)?;

    if let Some(report_path) = &args.report_path {
        let manifest = ScoreRunManifest {
            manifest_version: 1,
            generated_at: now_utc_string(),
            source_path: args.decode_path.display().to_string(),
            source_sha256: sha256_bytes(&raw),
            utterance_count: corpus.len(),
            marker_width: args.marker_width,
            dictionary: segmenter
                .as_ref()
                .map(|segmenter| segmenter.dictionary().to_string())
                .unwrap_or_else(|| "unused".to_string()),
            hmm: segmenter
                .as_ref()
                .map(JiebaSegmenter::hmm)
                .unwrap_or(!args.no_hmm),
            reports,
        };
        write_json_pretty(report_path, &manifest)?;
        info!(path = %report_path.display(), "wrote score report");
    }

    Ok(())
}

pub fn requested_granularities(selection: GranularitySelection) -> Vec<Granularity> {
    let mut granularities = Vec::with_capacity(2);
    if selection.wants_char() {
        granularities.push(Granularity::Char);
    }
    if selection.wants_word() {
        granularities.push(Granularity::Word);
    }
    granularities
}

fn build_segmenter(args: &ScoreArgs) -> Result<JiebaSegmenter> {
    let hmm = !args.no_hmm;
    match &args.dict_path {
        Some(path) => JiebaSegmenter::from_dictionary_file(path, hmm),
        None => {
            info!(hmm, "using embedded segmentation dictionary");
            Ok(JiebaSegmenter::from_default_dictionary(hmm))
        }
    }
}

pub fn score_corpus(
    pool: &ThreadPool,
    scorer: &PairScorer<'_>,
    corpus: &Corpus,
    granularity: Granularity,
    policy: FailurePolicy,
) -> Result<AggregateReport> {
    let progress = progress_bar(corpus.len(), granularity)?;

    let outcomes = pool.install(|| {
        corpus
            .utterances
            .par_iter()
            .map(|utterance| {
                let outcome =
                    scorer.try_score(&utterance.hypothesis, &utterance.reference, granularity);
                progress.set_message(utterance.id.clone());
                progress.inc(1);
                outcome
            })
            .collect::<Vec<ScoreOutcome>>()
    });
    progress.finish_and_clear();

    let mut aggregator = CorpusAggregator::new(granularity, policy);
    aggregator.extend(outcomes);
    let report = aggregator
        .finish()
        .with_context(|| format!("failed to aggregate {} scores", granularity.as_str()))?;

    info!(
        granularity = granularity.as_str(),
        scored = report.scored_count,
        failed = report.failed_count,
        "scoring complete"
    );
    Ok(report)
}

fn progress_bar(len: usize, granularity: Granularity) -> Result<ProgressBar> {
    let progress = ProgressBar::new(len as u64);
    progress.set_style(
        ProgressStyle::with_template(&format!(
            "{}: scoring {{pos}}/{{len}} ({{percent}}%) [{{bar:40}}] {{msg}}",
            granularity.heading()
        ))?
        .progress_chars("#>-"),
    );
    Ok(progress)
}

fn write_reports(reports: &[AggregateReport]) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    for report in reports {
        writeln!(output, "{}", format_heading(report))?;
        write!(output, "{}", format_report(report))?;
    }
    output.flush()?;
    Ok(())
}
