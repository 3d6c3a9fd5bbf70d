pub mod engine;
pub mod tally;
pub mod types;

pub use self::types::{AxisResult, RawTally, ScoreReport, WeightedScores};
use crate::config::ScoringConfig;
use crate::error::J16tResult;
use crate::ledger::ResponseLedger;
use crate::types::{Axis, Letter, LetterMap, TypeCode};
use tracing::debug;

/// Pure scoring over a ledger. Holds only its calibration, so it can be
/// shared freely and called at any rate.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScoringConfig,
    max_scores: LetterMap<u32>,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> J16tResult<Self> {
        config.validate()?;
        let max_scores = config.max_scores();
        Ok(Self { config, max_scores })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn max_scores(&self) -> &LetterMap<u32> {
        &self.max_scores
    }

    pub fn tally(&self, ledger: &ResponseLedger) -> RawTally {
        tally::tally(ledger.answers())
    }

    pub fn weigh(&self, raw: &RawTally) -> WeightedScores {
        tally::weigh(raw, &self.config)
    }

    /// Scores any ledger, complete or not. Unanswered questions contribute
    /// nothing, and an empty axis resolves to its priority letter.
    pub fn score(&self, ledger: &ResponseLedger) -> ScoreReport {
        let raw = self.tally(ledger);
        self.build_report(raw, ledger.answered_count(), ledger.len())
    }

    /// Normal-path scoring: refuses a ledger with unanswered questions.
    pub fn score_complete(&self, ledger: &ResponseLedger) -> J16tResult<ScoreReport> {
        ledger.ensure_complete()?;
        Ok(self.score(ledger))
    }

    /// Scores raw answers against a question-to-axis mapping, rejecting any
    /// answer that does not belong to its question's axis.
    pub fn score_answers(&self, axes: &[Axis], cells: &[Option<Letter>]) -> J16tResult<ScoreReport> {
        let raw = tally::tally_checked(axes, cells)?;
        let answered = cells.iter().filter(|c| c.is_some()).count();
        Ok(self.build_report(raw, answered, cells.len()))
    }

    fn build_report(&self, raw: RawTally, answered: usize, total: usize) -> ScoreReport {
        let weighted = self.weigh(&raw);
        let axes = engine::resolve_axes(&weighted, &self.max_scores, self.config.score_cap);

        for r in &axes {
            debug!(
                axis = %r.axis,
                winner = %r.winner,
                winner_score = r.winner_score,
                loser_score = r.loser_score,
                tie = r.is_tie(),
                "axis resolved ({:.1}%)",
                r.percent
            );
        }

        // Winners come from their own axis, in axis order.
        let type_code = TypeCode(axes.map(|r| r.winner));

        ScoreReport {
            type_code,
            converse_code: type_code.converse(),
            axes,
            raw,
            weighted,
            answered,
            total,
        }
    }
}
