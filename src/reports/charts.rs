use j16t::chart::{BandLayout, BarRect, PairedView, PrimaryView};
use j16t::display;

const ROWS: usize = 10;
const PRIMARY_COLS: usize = 48;
const PAIRED_COLS: usize = 72;

/// Rasterises bar rectangles onto a character grid, one cell per unit.
fn raster(rects: &[BarRect], cols: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(ROWS + 1);
    for r in 0..ROWS {
        let cy = r as f64 + 0.5;
        let line: String = (0..cols)
            .map(|c| {
                let cx = c as f64 + 0.5;
                let hit = rects
                    .iter()
                    .any(|b| cx >= b.x && cx < b.x + b.width && cy >= b.y);
                if hit {
                    '█'
                } else {
                    ' '
                }
            })
            .collect();
        let tick = match r {
            0 => "100 |",
            _ if r == ROWS / 2 => " 50 |",
            _ => "    |",
        };
        lines.push(format!("{}{}", tick, line.trim_end()));
    }
    lines.push(format!("  0 +{}", "-".repeat(cols)));
    lines
}

/// Centres each label under its bar.
fn label_row(rects: &[BarRect], labels: &[String], cols: usize) -> String {
    let mut row = vec![' '; cols + 8];
    for (rect, label) in rects.iter().zip(labels) {
        let centre = (rect.x + rect.width / 2.0).round() as i64;
        let start = (centre - label.chars().count() as i64 / 2).max(0) as usize;
        for (i, ch) in label.chars().enumerate() {
            if let Some(slot) = row.get_mut(start + i) {
                *slot = ch;
            }
        }
    }
    format!("     {}", row.into_iter().collect::<String>().trim_end())
}

pub fn print_primary_chart(view: &PrimaryView) {
    let layout = BandLayout::new(PRIMARY_COLS as f64, ROWS as f64);
    let rects = layout.primary(view);

    println!();
    for line in raster(&rects, PRIMARY_COLS) {
        println!("{}", line);
    }
    let letters: Vec<String> = view
        .bars
        .iter()
        .map(|b| display::format_letter(b.letter).to_string())
        .collect();
    let percents: Vec<String> = view.bars.iter().map(|b| format!("{:.0}%", b.percent)).collect();
    println!("{}", label_row(&rects, &letters, PRIMARY_COLS));
    println!("{}", label_row(&rects, &percents, PRIMARY_COLS));
}

pub fn print_paired_chart(view: &PairedView) {
    let layout = BandLayout::new(PAIRED_COLS as f64, ROWS as f64);
    let rects = layout.paired(view);

    println!();
    for line in raster(&rects, PAIRED_COLS) {
        println!("{}", line);
    }
    let letters: Vec<String> = view
        .bars()
        .map(|b| display::format_letter(b.letter).to_string())
        .collect();
    let percents: Vec<String> = view.bars().map(|b| format!("{:.0}", b.percent)).collect();
    println!("{}", label_row(&rects, &letters, PAIRED_COLS));
    println!("{}", label_row(&rects, &percents, PAIRED_COLS));
}
