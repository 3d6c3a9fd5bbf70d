mod common;

use common::{assert_close, axis_ledger, ledger_from_counts, reference_ledger, scorer};
use j16t::chart::{BandLayout, BarId, ChartProjector, ViewKind};
use j16t::config::ScoringConfig;
use j16t::error::J16tError;
use j16t::types::{Axis, Letter};

fn projector() -> ChartProjector {
    ChartProjector::new(&scorer())
}

#[test]
fn test_primary_view_follows_axis_order() {
    let ledger = ledger_from_counts(&[
        (Letter::I, 4),
        (Letter::S, 2),
        (Letter::N, 9),
        (Letter::T, 1),
        (Letter::J, 3),
        (Letter::P, 3),
    ]);
    let report = scorer().score(&ledger);
    let view = projector().primary(&report);

    let letters: Vec<Letter> = view.bars.iter().map(|b| b.letter).collect();
    assert_eq!(letters, vec![Letter::I, Letter::N, Letter::T, Letter::J]);

    assert_close(view.bars[0].percent, 8.0 / 22.0 * 100.0);
    assert_close(view.bars[1].percent, 9.0 / 23.0 * 100.0);
    for (bar, axis) in view.bars.iter().zip(&report.axes) {
        assert_close(bar.percent, axis.percent);
        assert_eq!(bar.id.view(), ViewKind::Primary);
    }
}

#[test]
fn test_paired_view_caps_dominant_letter_and_complements_partner() {
    // Weighted S = 25 (over the cap), N = 5.
    let report = scorer().score(&axis_ledger(Axis::SN, 25, 5));
    let view = projector().paired(&report);

    let group = &view.groups[Axis::SN.position()];
    assert_eq!(group.label, "S / N");
    assert_eq!(group.bars[0].letter, Letter::S);
    assert_eq!(group.bars[1].letter, Letter::N);

    assert_close(view.bar(Letter::S).percent, 20.0 / 23.0 * 100.0);
    // N is under the cap itself, but its partner is over it, so N shows the
    // complement (23 - 20) / 23 rather than its true ratio 5 / 23.
    assert_close(view.bar(Letter::N).percent, 3.0 / 23.0 * 100.0);
}

#[test]
fn test_paired_view_uses_true_ratio_below_cap() {
    let report = scorer().score(&axis_ledger(Axis::TF, 12, 7));
    let view = projector().paired(&report);
    assert_close(view.bar(Letter::T).percent, 12.0 / 23.0 * 100.0);
    assert_close(view.bar(Letter::F).percent, 7.0 / 23.0 * 100.0);
}

#[test]
fn test_paired_view_boundary_at_exactly_the_cap() {
    // Own-cap check runs before the partner check. A letter sitting exactly
    // on the cap is not capped, so with a partner above the cap it falls to
    // the complement.
    let report = scorer().score(&axis_ledger(Axis::JP, 20, 21));
    let view = projector().paired(&report);
    assert_close(view.bar(Letter::J).percent, 3.0 / 23.0 * 100.0);
    assert_close(view.bar(Letter::P).percent, 20.0 / 23.0 * 100.0);

    // Both on the cap: neither rule fires, both show the true ratio.
    let report = scorer().score(&axis_ledger(Axis::JP, 20, 20));
    let view = projector().paired(&report);
    assert_close(view.bar(Letter::J).percent, 20.0 / 23.0 * 100.0);
    assert_close(view.bar(Letter::P).percent, 20.0 / 23.0 * 100.0);
}

#[test]
fn test_paired_view_applies_ei_weighting_before_capping() {
    // 11 E answers weigh 22, over the cap of 20.
    let report = scorer().score(&axis_ledger(Axis::EI, 11, 0));
    let view = projector().paired(&report);
    assert_close(view.bar(Letter::E).percent, 20.0 / 22.0 * 100.0);
    assert_close(view.bar(Letter::I).percent, 2.0 / 22.0 * 100.0);
}

#[test]
fn test_paired_group_labels_use_display_letters() {
    let report = scorer().score(&reference_ledger(0));
    let view = projector().paired(&report);
    let labels: Vec<&str> = view.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["E / I", "S / N", "T / F", "C(J) / M(P)"]);
    assert_eq!(view.bars().count(), 8);
}

#[test]
fn test_bar_ids_resolve_to_their_letter() {
    let report = scorer().score(&reference_ledger(1));
    let p = projector();

    for bar in p.primary(&report).bars {
        assert_eq!(p.resolve(bar.id), bar.letter);
    }
    for bar in p.paired(&report).bars() {
        assert_eq!(p.resolve(bar.id), bar.letter);
        let raw = bar.id.as_raw();
        assert_eq!(BarId::from_raw(raw), Some(bar.id));
    }
}

#[test]
fn test_dispatch_invokes_handler_with_letter() {
    let report = scorer().score(&reference_ledger(0));
    let p = projector();
    let view = p.paired(&report);

    let mut clicked = Vec::new();
    for bar in view.bars() {
        p.dispatch(bar.id, |letter| clicked.push(letter));
    }
    assert_eq!(clicked, Letter::ALL.to_vec());
}

#[test]
fn test_band_layout_heights_track_percent() {
    let report = scorer().score(&reference_ledger(0));
    let p = projector();
    let layout = BandLayout::new(540.0, 310.0);

    let rects = layout.primary(&p.primary(&report));
    assert_eq!(rects.len(), 4);
    for w in rects.windows(2) {
        assert!(w[0].x + w[0].width < w[1].x, "bars overlap");
    }
    let e = &rects[0];
    assert_close(e.height, 310.0 * (20.0 / 22.0));
    assert_close(e.y + e.height, 310.0);
    assert_close(e.marker.1, e.y - 25.0);

    let paired = layout.paired(&p.paired(&report));
    assert_eq!(paired.len(), 8);
    // Bars within a group touch.
    assert_close(paired[0].x + paired[0].width, paired[1].x);
    assert!(paired.iter().all(|r| r.x >= 0.0 && r.x + r.width <= 540.0));
}

#[test]
fn test_projector_from_config_rejects_bad_tables() {
    let zero_max = ScoringConfig {
        max_score_s: 0,
        ..Default::default()
    };
    assert!(matches!(
        ChartProjector::from_config(&zero_max),
        Err(J16tError::Config(_))
    ));

    let under_cap = ScoringConfig {
        max_score_s: 10,
        ..Default::default()
    };
    assert!(matches!(
        ChartProjector::from_config(&under_cap),
        Err(J16tError::Config(_))
    ));

    let p = ChartProjector::from_config(&ScoringConfig::default()).unwrap();
    let report = scorer().score(&axis_ledger(Axis::SN, 25, 0));
    assert_close(p.paired(&report).bar(Letter::S).percent, 20.0 / 23.0 * 100.0);
}

#[test]
fn test_primary_bars_reuse_report_percent() {
    // Projector calibrated differently from the scorer still shows the
    // scorer's resolved percent on the primary view.
    let report = scorer().score(&axis_ledger(Axis::SN, 25, 0));
    let other = ScoringConfig {
        max_score_s: 40,
        max_score_n: 40,
        ..Default::default()
    };
    let p = ChartProjector::from_config(&other).unwrap();
    let view = p.primary(&report);
    assert_eq!(view.bars[1].letter, Letter::S);
    assert_close(view.bars[1].percent, report.axes[1].percent);
    assert_close(view.bars[1].percent, 20.0 / 23.0 * 100.0);
    assert!(view.bars.iter().all(|b| (0.0..=100.0).contains(&b.percent)));
}
