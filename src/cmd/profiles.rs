use crate::reports;
use clap::Args;
use j16t::content::ContentStore;
use j16t::display;
use j16t::error::J16tResult;

#[derive(Args, Debug, Clone)]
pub struct ProfilesArgs {
    /// Highlight a type (e.g. ESTJ or ESTC(J)) and print its description.
    #[arg(short = 't', long = "type")]
    pub type_code: Option<String>,
}

pub fn run(args: &ProfilesArgs, content: &ContentStore) -> J16tResult<()> {
    let highlight = args
        .type_code
        .as_deref()
        .map(display::parse_type_key)
        .transpose()?;

    reports::print_profile_grid(content, highlight.as_ref());

    if let Some(code) = highlight {
        reports::print_type_description(content, &code);
    }
    Ok(())
}
