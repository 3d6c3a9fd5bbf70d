use crate::types::{Axis, Letter, LetterMap, TypeCode};
use serde::Serialize;

/// Answer counts per letter, before weighting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawTally(pub LetterMap<u32>);

impl RawTally {
    #[inline(always)]
    pub fn get(&self, letter: Letter) -> u32 {
        self.0[letter]
    }

    /// Answered questions on `axis` (both letters together).
    pub fn axis_total(&self, axis: Axis) -> u32 {
        let [a, b] = axis.letters();
        self.0[a] + self.0[b]
    }
}

/// Raw tally with the per-letter multiplier applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeightedScores(pub LetterMap<u32>);

impl WeightedScores {
    #[inline(always)]
    pub fn get(&self, letter: Letter) -> u32 {
        self.0[letter]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisResult {
    pub axis: Axis,
    pub winner: Letter,
    /// The converse letter for this axis.
    pub loser: Letter,
    pub winner_score: u32,
    pub loser_score: u32,
    /// Winner's capped percent of its max score.
    pub percent: f64,
}

impl AxisResult {
    pub fn is_tie(&self) -> bool {
        self.winner_score == self.loser_score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub type_code: TypeCode,
    pub converse_code: TypeCode,
    pub axes: [AxisResult; 4],
    pub raw: RawTally,
    pub weighted: WeightedScores,
    pub answered: usize,
    pub total: usize,
}

impl ScoreReport {
    pub fn axis(&self, axis: Axis) -> &AxisResult {
        &self.axes[axis.position()]
    }

    /// Primary percent; `None` for a letter that lost its axis.
    pub fn percent(&self, letter: Letter) -> Option<f64> {
        let result = self.axis(letter.axis());
        (result.winner == letter).then_some(result.percent)
    }

    pub fn is_partial(&self) -> bool {
        self.answered < self.total
    }
}
