use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use j16t::config::Config;
use j16t::content::ContentStore;
use j16t::error::J16tResult;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "J16T (Jung 16 Temperaments) questionnaire", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Instrument to administer (.json full store or .csv question bank).
    #[arg(global = true, long)]
    content: Option<PathBuf>,

    #[arg(global = true, long, default_value = "data/descriptions.json")]
    descriptions: PathBuf,

    /// JSON file with scoring/session settings; explicit flags win.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the questionnaire interactively.
    Take(cmd::take::TakeArgs),
    /// Score a prepared set of answers.
    Score(cmd::score::ScoreArgs),
    /// Fill every answer at random and show the results.
    Random(cmd::random::RandomArgs),
    /// List the sixteen profiles.
    Profiles(cmd::profiles::ProfilesArgs),
    /// Show what a chart letter means.
    Explain(cmd::explain::ExplainArgs),
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_content(cli: &Cli) -> J16tResult<Arc<ContentStore>> {
    let store = match &cli.content {
        Some(path) => ContentStore::load_from_file(path)?,
        None => {
            info!("📋 Using the reference instrument");
            ContentStore::reference()
        }
    };
    Ok(Arc::new(store.with_descriptions_file(&cli.descriptions)?))
}

/// File settings first, then any flag given explicitly on the command line.
fn resolve_config(cli: &Cli, flags: &Config, sub_matches: &ArgMatches) -> J16tResult<Config> {
    let Some(path) = &cli.config else {
        flags.scoring.validate()?;
        return Ok(flags.clone());
    };

    info!("⚖️  Loading Config from: {}", path.display());
    let mut config = Config::load_from_file(path)?;
    config.scoring.merge_from_cli(&flags.scoring, sub_matches);
    config.session.merge_from_cli(&flags.session, sub_matches);
    config.scoring.validate()?;
    Ok(config)
}

fn run(cli: Cli, matches: &ArgMatches) -> J16tResult<()> {
    let content = load_content(&cli)?;

    let sub_matches = match matches.subcommand() {
        Some((_, m)) => m,
        None => matches,
    };

    match &cli.command {
        Commands::Take(args) => {
            let config = resolve_config(&cli, &args.config, sub_matches)?;
            cmd::take::run(args, content, &config)
        }
        Commands::Score(args) => {
            let config = resolve_config(&cli, &args.config, sub_matches)?;
            cmd::score::run(args, &content, &config)
        }
        Commands::Random(args) => {
            let config = resolve_config(&cli, &args.config, sub_matches)?;
            cmd::random::run(args, content, &config)
        }
        Commands::Profiles(args) => cmd::profiles::run(args, &content),
        Commands::Explain(args) => cmd::explain::run(args, &content),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);
    if cli.content.is_some() && cli.config.is_none() {
        warn!("⚠️  Custom content with default calibration; check the max-score table fits it.");
    }

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
