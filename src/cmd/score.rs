use crate::reports;
use clap::Args;
use j16t::config::Config;
use j16t::content::ContentStore;
use j16t::error::{J16tError, J16tResult};
use j16t::ledger::ResponseLedger;
use j16t::scorer::Scorer;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// One letter per question in order, `-` for unanswered.
    #[arg(short, long, conflicts_with = "answers_file")]
    pub answers: Option<String>,

    #[arg(short = 'f', long)]
    pub answers_file: Option<PathBuf>,

    /// Score an incomplete ledger (development only).
    #[arg(long, default_value_t = false)]
    pub partial: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &ScoreArgs, content: &ContentStore, config: &Config) -> J16tResult<()> {
    let answers = match (&args.answers, &args.answers_file) {
        (Some(s), _) => s.clone(),
        (None, Some(path)) => {
            info!("📂 Loading Answers: {}", path.display());
            fs::read_to_string(path)?
        }
        (None, None) => {
            return Err(J16tError::Parse(
                "provide --answers or --answers-file".into(),
            ))
        }
    };

    let ledger = ResponseLedger::parse_answers(content.axes(), &answers)?;
    let scorer = Scorer::new(config.scoring.clone())?;

    let report = if args.partial {
        if !ledger.is_complete() {
            warn!(
                "⚠️  Partial scoring: {} of {} answered",
                ledger.answered_count(),
                ledger.len()
            );
        }
        scorer.score(&ledger)
    } else {
        scorer.score_complete(&ledger)?
    };

    reports::render_results(&report, content, &scorer, args.json)
}
