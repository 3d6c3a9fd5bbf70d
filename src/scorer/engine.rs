use super::types::{AxisResult, WeightedScores};
use crate::types::{Axis, Letter, LetterMap};

/// Winner and loser of an axis. Ties go to the priority letter (E, S, T, J).
#[inline(always)]
pub fn decide(axis: Axis, weighted: &WeightedScores) -> (Letter, Letter) {
    let [a, b] = axis.letters();
    if weighted.get(a) >= weighted.get(b) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Primary-view percent: `min(score, cap) / max * 100`.
#[inline(always)]
pub fn primary_percent(score: u32, max: u32, cap: u32) -> f64 {
    f64::from(score.min(cap)) / f64::from(max) * 100.0
}

/// Paired-view percent for one letter of an axis.
///
/// Branch order matters: the letter's own cap is checked before its
/// partner's. At exactly `cap` neither branch fires, so a letter sitting on
/// the cap shows its true ratio while a partner above it flips to the
/// complement.
#[inline(always)]
pub fn paired_percent(score: u32, partner_score: u32, max: u32, cap: u32) -> f64 {
    let max_f = f64::from(max);
    if score > cap {
        f64::from(cap) / max_f * 100.0
    } else if partner_score > cap {
        f64::from(max.saturating_sub(cap)) / max_f * 100.0
    } else {
        f64::from(score) / max_f * 100.0
    }
}

pub fn resolve_axes(
    weighted: &WeightedScores,
    max_scores: &LetterMap<u32>,
    cap: u32,
) -> [AxisResult; 4] {
    Axis::ALL.map(|axis| {
        let (winner, loser) = decide(axis, weighted);
        let winner_score = weighted.get(winner);
        AxisResult {
            axis,
            winner,
            loser,
            winner_score,
            loser_score: weighted.get(loser),
            percent: primary_percent(winner_score, max_scores[winner], cap),
        }
    })
}
