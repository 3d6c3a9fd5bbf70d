use crate::reports;
use clap::Args;
use j16t::config::Config;
use j16t::content::ContentStore;
use j16t::error::J16tResult;
use j16t::session::Session;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RandomArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &RandomArgs, content: Arc<ContentStore>, config: &Config) -> J16tResult<()> {
    let mut rng = if let Some(s) = args.seed {
        info!("🎲 Random fill with seed {}", s);
        fastrand::Rng::with_seed(s)
    } else {
        fastrand::Rng::new()
    };

    let mut session = Session::new(content, config)?;
    session.start()?;
    let report = session.dev_fill(&mut rng)?.clone();

    if !args.json {
        println!("Answers: {}", session.ledger().to_answer_string());
    }
    reports::render_results(&report, session.content(), session.scorer(), args.json)
}
