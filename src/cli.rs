use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "cjk-rouge",
    version,
    about = "Character- and word-level ROUGE scoring for Chinese ASR decoding results"
)]
pub struct Cli {
    #[command(flatten)]
    pub score: ScoreArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Decoding-result JSON with an `utts` object keyed by utterance id.
    pub decode_path: PathBuf,

    /// Segmentation dictionary in jieba format; the embedded one is used when omitted.
    /// Word-mode scores only line up with jieba big-dictionary runs when `dict.txt.big` is passed.
    #[arg(long)]
    pub dict_path: Option<PathBuf>,

    /// Disable jieba's HMM pass for out-of-vocabulary words.
    #[arg(long, default_value_t = false)]
    pub no_hmm: bool,

    /// Token granularity to score.
    #[arg(long, value_enum, default_value_t = GranularitySelection::Both)]
    pub granularity: GranularitySelection,

    /// Width of the trailing decoder marker cut from every hypothesis (0 disables).
    #[arg(long, default_value_t = 5)]
    pub marker_width: usize,

    /// How unscorable pairs enter the corpus mean.
    #[arg(long, value_enum, default_value_t = FailurePolicy::Include)]
    pub failure_policy: FailurePolicy,

    /// Worker threads for pair scoring (1 scores sequentially).
    #[arg(long, default_value_t = 1)]
    pub jobs: usize,

    /// Optional path for the JSON run manifest.
    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum GranularitySelection {
    Char,
    Word,
    Both,
}

impl GranularitySelection {
    pub fn wants_char(self) -> bool {
        matches!(self, Self::Char | Self::Both)
    }

    pub fn wants_word(self) -> bool {
        matches!(self, Self::Word | Self::Both)
    }
}

/// How pairs that could not be scored enter the corpus mean.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum FailurePolicy {
    /// Failed pairs contribute an all-zero vector.
    Include,
    /// Failed pairs are left out of the denominator.
    Exclude,
}

impl FailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }
}
