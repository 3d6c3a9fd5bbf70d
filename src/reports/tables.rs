use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use j16t::config::ScoringConfig;
use j16t::content::{ContentStore, ProfileTone};
use j16t::display;
use j16t::scorer::ScoreReport;
use j16t::types::{Letter, TypeCode};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn hex_color(hex: &str) -> Option<Color> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

fn letter_cell(content: &ContentStore, letter: Letter) -> Cell {
    let cell = Cell::new(display::format_letter(letter)).add_attribute(Attribute::Bold);
    match hex_color(&content.letter_info(letter).color) {
        Some(c) => cell.fg(c),
        None => cell,
    }
}

pub fn print_type_banner(report: &ScoreReport, content: &ContentStore) {
    let words: Vec<String> = report
        .type_code
        .letters()
        .iter()
        .map(|&l| display::highlight_word(l, &content.letter_info(l).word))
        .collect();

    println!("\nYour type: {}", report.type_code.display_key());
    println!("{}", words.join(" - "));
    if let Some(profile) = content.profile(&report.type_code) {
        println!("\"{}\"", profile.title);
    }
    if report.is_partial() {
        println!(
            "(partial: {} of {} questions answered)",
            report.answered, report.total
        );
    }
}

pub fn print_type_description(content: &ContentStore, code: &TypeCode) {
    println!("\n{}", content.type_description(code));
}

pub fn print_letter_cards(content: &ContentStore, letters: &[Letter]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Trait").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for &letter in letters {
        let info = content.letter_info(letter);
        let word = match display::suffix(letter) {
            Some(s) => format!("{} ({})", info.word, s),
            None => info.word.clone(),
        };
        table.add_row(vec![
            letter_cell(content, letter),
            Cell::new(word),
            Cell::new(content.letter_description(letter)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_score_table(report: &ScoreReport, scoring: &ScoringConfig) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Axis").add_attribute(Attribute::Bold),
        Cell::new("Raw"),
        Cell::new(format!("Weighted\n(E/I x{})", scoring.ei_weight)),
        Cell::new("Max"),
        Cell::new("Winner").fg(Color::Cyan),
        Cell::new(format!("%\n(cap {})", scoring.score_cap)).add_attribute(Attribute::Bold),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in &report.axes {
        let [a, b] = r.axis.letters();
        let winner = if r.is_tie() {
            format!("{} (tie)", display::format_letter(r.winner))
        } else {
            display::format_letter(r.winner).to_string()
        };
        table.add_row(vec![
            Cell::new(display::group_label(r.axis)).add_attribute(Attribute::Bold),
            Cell::new(format!("{} / {}", report.raw.get(a), report.raw.get(b))),
            Cell::new(format!(
                "{} / {}",
                report.weighted.get(a),
                report.weighted.get(b)
            )),
            Cell::new(format!(
                "{} / {}",
                scoring.max_score(a),
                scoring.max_score(b)
            )),
            Cell::new(winner).fg(Color::Cyan),
            Cell::new(format!("{:.1}", r.percent)).add_attribute(Attribute::Bold),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_profile_grid(content: &ContentStore, highlight: Option<&TypeCode>) {
    if content.profiles.is_empty() {
        return;
    }
    println!("\nDiscover Jung's 16 Profiles");

    let mut table = new_table();
    for row in content.profiles.chunks(4) {
        let cells: Vec<Cell> = row
            .iter()
            .map(|p| {
                let text = format!("{}\n{}", display::type_key(&p.code), p.title);
                let cell = Cell::new(text).set_alignment(CellAlignment::Center);
                let cell = match p.tone {
                    ProfileTone::A => cell,
                    ProfileTone::B => cell.add_attribute(Attribute::Dim),
                };
                if highlight == Some(&p.code) {
                    cell.fg(Color::Green).add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_letter_explanation(content: &ContentStore, letter: Letter) {
    let info = content.letter_info(letter);
    let mut table = new_table();
    table.add_row(vec![
        letter_cell(content, letter),
        Cell::new(display::highlight_word(letter, &info.word)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Q"), Cell::new(&info.prompt)]);
    table.add_row(vec![Cell::new("A"), Cell::new(&info.answer)]);
    println!("{}", table);
}
