mod charts;
mod tables;

pub use self::charts::{print_paired_chart, print_primary_chart};
pub use self::tables::{
    print_letter_cards, print_letter_explanation, print_profile_grid, print_score_table,
    print_type_banner, print_type_description,
};

use j16t::chart::{BandLayout, BarRect, ChartProjector, PairedView, PrimaryView};
use j16t::content::ContentStore;
use j16t::error::J16tResult;
use j16t::scorer::{ScoreReport, Scorer};
use serde::Serialize;

/// Everything a graphical surface needs to draw both charts.
#[derive(Debug, Serialize)]
pub struct ResultsExport<'a> {
    pub type_code: String,
    pub type_key: String,
    pub converse_code: String,
    pub converse_key: String,
    pub report: &'a ScoreReport,
    pub primary: PrimaryView,
    pub paired: PairedView,
    pub primary_layout: Vec<BarRect>,
    pub paired_layout: Vec<BarRect>,
}

pub fn render_results(
    report: &ScoreReport,
    content: &ContentStore,
    scorer: &Scorer,
    json: bool,
) -> J16tResult<()> {
    let projector = ChartProjector::new(scorer);
    let primary = projector.primary(report);
    let paired = projector.paired(report);

    if json {
        let export = ResultsExport {
            type_code: report.type_code.to_string(),
            type_key: report.type_code.display_key(),
            converse_code: report.converse_code.to_string(),
            converse_key: report.converse_code.display_key(),
            report,
            primary_layout: BandLayout::new(540.0, 310.0).primary(&primary),
            paired_layout: BandLayout::new(900.0, 410.0).paired(&paired),
            primary,
            paired,
        };
        println!("{}", serde_json::to_string_pretty(&export)?);
        return Ok(());
    }

    println!("\n📊 === YOUR RESULTS === 📊");
    print_primary_chart(&primary);
    print_type_banner(report, content);
    print_type_description(content, &report.type_code);
    print_letter_cards(content, &report.type_code.letters());
    print_score_table(report, scorer.config());

    println!("\n🔁 === CONVERSE PROFILE: {} ===", report.converse_code.display_key());
    print_paired_chart(&paired);
    print_type_description(content, &report.converse_code);
    print_letter_cards(content, &report.converse_code.letters());

    print_profile_grid(content, Some(&report.type_code));
    Ok(())
}
