use crate::content::ContentStore;
use crate::error::{J16tError, J16tResult};
use crate::types::{Axis, Letter};

/// One optional answer per question, index-aligned with the question bank.
///
/// A stored letter always belongs to its question's axis; `set` rejects
/// anything else and leaves the cell untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseLedger {
    axes: Vec<Axis>,
    answers: Vec<Option<Letter>>,
}

impl ResponseLedger {
    pub fn new(axes: Vec<Axis>) -> Self {
        let answers = vec![None; axes.len()];
        Self { axes, answers }
    }

    pub fn for_content(content: &ContentStore) -> Self {
        Self::new(content.axes())
    }

    /// Builds a ledger from an answer string: one letter per question,
    /// `-` or `.` for unanswered. Whitespace is ignored.
    pub fn parse_answers(axes: Vec<Axis>, answers: &str) -> J16tResult<Self> {
        let cells = answers
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '-' | '.' => Ok(None),
                c => Letter::from_char(c)
                    .map(Some)
                    .ok_or_else(|| J16tError::Parse(format!("'{}' is not a trait letter", c))),
            })
            .collect::<J16tResult<Vec<_>>>()?;

        let mut ledger = Self::new(axes);
        ledger.fill_from(&cells)?;
        Ok(ledger)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn axis(&self, index: usize) -> Option<Axis> {
        self.axes.get(index).copied()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn answers(&self) -> &[Option<Letter>] {
        &self.answers
    }

    pub fn get(&self, index: usize) -> J16tResult<Option<Letter>> {
        self.answers
            .get(index)
            .copied()
            .ok_or(J16tError::QuestionOutOfRange {
                index,
                len: self.len(),
            })
    }

    pub fn set(&mut self, index: usize, letter: Letter) -> J16tResult<()> {
        let axis = self.axis(index).ok_or(J16tError::QuestionOutOfRange {
            index,
            len: self.len(),
        })?;
        if !axis.contains(letter) {
            return Err(J16tError::InvalidAxisLetter {
                index,
                letter,
                axis,
            });
        }
        self.answers[index] = Some(letter);
        Ok(())
    }

    /// Selects option 0 (priority letter) or option 1 of the question's axis.
    pub fn set_option(&mut self, index: usize, option: usize) -> J16tResult<()> {
        let axis = self.axis(index).ok_or(J16tError::QuestionOutOfRange {
            index,
            len: self.len(),
        })?;
        let letter = axis
            .letters()
            .get(option)
            .copied()
            .ok_or_else(|| J16tError::Parse(format!("option {} does not exist", option)))?;
        self.set(index, letter)
    }

    pub fn unset(&mut self, index: usize) -> J16tResult<()> {
        let len = self.len();
        let cell = self
            .answers
            .get_mut(index)
            .ok_or(J16tError::QuestionOutOfRange { index, len })?;
        *cell = None;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.answers.iter_mut().for_each(|a| *a = None);
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn first_unanswered(&self) -> Option<usize> {
        self.answers.iter().position(Option::is_none)
    }

    pub fn ensure_complete(&self) -> J16tResult<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(J16tError::IncompleteLedger {
                answered: self.answered_count(),
                total: self.len(),
            })
        }
    }

    /// Bulk-populates every cell. Validates the whole slice first, so a bad
    /// cell leaves the ledger as it was.
    pub fn fill_from(&mut self, cells: &[Option<Letter>]) -> J16tResult<()> {
        if cells.len() != self.len() {
            return Err(J16tError::LedgerLengthMismatch {
                expected: self.len(),
                actual: cells.len(),
            });
        }
        for (index, (&cell, &axis)) in cells.iter().zip(&self.axes).enumerate() {
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
        self.answers.copy_from_slice(cells);
        Ok(())
    }

    /// Answers every question with a coin flip between its two letters.
    pub fn fill_random(&mut self, rng: &mut fastrand::Rng) {
        for (cell, axis) in self.answers.iter_mut().zip(&self.axes) {
            let [a, b] = axis.letters();
            *cell = Some(if rng.bool() { a } else { b });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, Option<Letter>)> + '_ {
        self.axes.iter().copied().zip(self.answers.iter().copied())
    }

    pub fn to_answer_string(&self) -> String {
        self.answers
            .iter()
            .map(|a| a.map_or('-', Letter::as_char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_string_round_trips_unanswered_cells() {
        let axes = vec![Axis::EI, Axis::SN, Axis::JP];
        let ledger = ResponseLedger::parse_answers(axes, "E - p").unwrap();
        assert_eq!(ledger.to_answer_string(), "E-P");
        assert_eq!(ledger.answered_count(), 2);
    }
}
