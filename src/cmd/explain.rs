use crate::reports;
use clap::Args;
use j16t::chart::BarId;
use j16t::content::ContentStore;
use j16t::display;
use j16t::error::{J16tError, J16tResult};

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ExplainArgs {
    /// Trait letter, raw (J) or displayed (C(J)).
    pub letter: Option<String>,

    /// Bar id as exported in `--json` chart data.
    #[arg(long)]
    pub bar_id: Option<u8>,
}

pub fn run(args: &ExplainArgs, content: &ContentStore) -> J16tResult<()> {
    let letter = match (&args.letter, args.bar_id) {
        (Some(s), _) => display::parse_letter(s)?,
        (None, Some(raw)) => BarId::from_raw(raw)
            .map(BarId::letter)
            .ok_or_else(|| J16tError::Parse(format!("{} is not a bar id", raw)))?,
        (None, None) => return Err(J16tError::Parse("provide a letter or --bar-id".into())),
    };

    reports::print_letter_explanation(content, letter);
    Ok(())
}
