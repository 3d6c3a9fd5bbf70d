use crate::reports;
use clap::Args;
use j16t::config::Config;
use j16t::content::ContentStore;
use j16t::error::J16tResult;
use j16t::scorer::ScoreReport;
use j16t::session::Session;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct TakeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Skip the pause after each answer.
    #[arg(long, default_value_t = false)]
    pub no_delay: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

enum Input {
    Option(usize),
    Previous,
    Finish,
    Random,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "a" | "1" => Input::Option(0),
        "b" | "2" => Input::Option(1),
        "p" | "prev" => Input::Previous,
        "f" | "finish" => Input::Finish,
        "r" | "random" => Input::Random,
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown,
    }
}

pub fn run(args: &TakeArgs, content: Arc<ContentStore>, config: &Config) -> J16tResult<()> {
    let mut session = Session::new(content, config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    let report = drive(&mut session, stdin.lock(), stdout.lock(), !args.no_delay)?;

    match report {
        Some(report) => {
            reports::render_results(&report, session.content(), session.scorer(), args.json)
        }
        None => {
            info!("👋 Questionnaire abandoned");
            Ok(())
        }
    }
}

/// Runs the quiz loop over any line source. Returns `None` on quit or EOF.
pub fn drive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    pause: bool,
) -> J16tResult<Option<ScoreReport>> {
    session.start()?;
    let total = session.ledger().len();
    let mut lines = input.lines();

    loop {
        let Some((index, question)) = session.current_question() else {
            return Ok(session.report().cloned());
        };
        let selected = session.ledger().get(index)?;

        writeln!(out, "\n[{}/{}] {}", index + 1, total, question.text)?;
        for (i, (key, text)) in ["a", "b"].iter().zip(&question.options).enumerate() {
            let mark = if selected == question.letter_for(i) { "*" } else { " " };
            writeln!(out, "  {} {}) {}", mark, key, text)?;
        }
        let finish_hint = if session.is_last_question() && session.can_finish() {
            ", f=finish"
        } else {
            ""
        };
        write!(out, "> (a/b, p=previous{}, q=quit) ", finish_hint)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };

        match parse_input(&line?) {
            Input::Option(opt) => {
                session.select_option(opt)?;
                if pause && !session.is_last_question() {
                    thread::sleep(session.advance_delay());
                }
            }
            Input::Previous => session.previous()?,
            Input::Finish => {
                if session.can_finish() {
                    return Ok(Some(session.finish()?.clone()));
                }
                match session.ledger().first_unanswered() {
                    Some(i) => writeln!(out, "Question {} is still unanswered.", i + 1)?,
                    None => writeln!(out, "Answer the last question to finish.")?,
                }
            }
            Input::Random => {
                warn!("⚠️  Development fill: answers are random");
                let mut rng = fastrand::Rng::new();
                return Ok(Some(session.dev_fill(&mut rng)?.clone()));
            }
            Input::Quit => return Ok(None),
            Input::Unknown => writeln!(out, "Please answer a or b.")?,
        }
    }
}
