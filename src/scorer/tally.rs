use super::types::{RawTally, WeightedScores};
use crate::config::ScoringConfig;
use crate::error::{J16tError, J16tResult};
use crate::types::{Axis, Letter, LetterMap};

/// Counts one per answered cell. Unanswered cells count for nothing.
pub fn tally<'a, I>(cells: I) -> RawTally
where
    I: IntoIterator<Item = &'a Option<Letter>>,
{
    let mut counts = LetterMap::<u32>::default();
    for letter in cells.into_iter().flatten() {
        counts[*letter] += 1;
    }
    RawTally(counts)
}

/// Like `tally`, but checks each answer against its question's axis.
pub fn tally_checked(axes: &[Axis], cells: &[Option<Letter>]) -> J16tResult<RawTally> {
    if axes.len() != cells.len() {
        return Err(J16tError::LedgerLengthMismatch {
            expected: axes.len(),
            actual: cells.len(),
        });
    }
    for (index, (&axis, &cell)) in axes.iter().zip(cells).enumerate() {
        if let Some(letter) = cell {
            if !axis.contains(letter) {
                return Err(J16tError::InvalidAxisLetter {
                    index,
                    letter,
                    axis,
                });
            }
        }
    }
    Ok(tally(cells))
}

/// Saturates rather than wrapping, so an oversized weight can never flip a
/// winner.
pub fn weigh(raw: &RawTally, config: &ScoringConfig) -> WeightedScores {
    WeightedScores(LetterMap::from_fn(|l| raw.get(l).saturating_mul(config.weight(l))))
}
