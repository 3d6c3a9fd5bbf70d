#![allow(dead_code)]

use j16t::config::ScoringConfig;
use j16t::content::ContentStore;
use j16t::ledger::ResponseLedger;
use j16t::scorer::Scorer;
use j16t::types::{Axis, Letter};

pub fn scorer() -> Scorer {
    Scorer::new(ScoringConfig::default()).expect("default calibration is valid")
}

/// A ledger on a single axis with `a` answers for the priority letter
/// followed by `b` for its partner.
pub fn axis_ledger(axis: Axis, a: usize, b: usize) -> ResponseLedger {
    let [first, second] = axis.letters();
    let mut ledger = ResponseLedger::new(vec![axis; a + b]);
    for i in 0..a {
        ledger.set(i, first).unwrap();
    }
    for i in a..a + b {
        ledger.set(i, second).unwrap();
    }
    ledger
}

/// Concatenates per-axis blocks into one ledger: (letter, count) pairs.
pub fn ledger_from_counts(counts: &[(Letter, usize)]) -> ResponseLedger {
    let axes: Vec<Axis> = counts
        .iter()
        .flat_map(|&(l, n)| std::iter::repeat(l.axis()).take(n))
        .collect();
    let mut ledger = ResponseLedger::new(axes);
    let mut i = 0;
    for &(letter, n) in counts {
        for _ in 0..n {
            ledger.set(i, letter).unwrap();
            i += 1;
        }
    }
    ledger
}

/// Reference ledger where every answer is option `option` of its question.
pub fn reference_ledger(option: usize) -> ResponseLedger {
    let content = ContentStore::reference();
    let mut ledger = ResponseLedger::for_content(&content);
    for i in 0..ledger.len() {
        ledger.set_option(i, option).unwrap();
    }
    ledger
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {:.6}, got {:.6}",
        expected,
        actual
    );
}
