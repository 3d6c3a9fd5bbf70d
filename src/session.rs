use crate::config::Config;
use crate::content::{ContentStore, Question};
use crate::error::{J16tError, J16tResult};
use crate::ledger::ResponseLedger;
use crate::scorer::{ScoreReport, Scorer};
use crate::types::Letter;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Cover,
    Quiz { index: usize },
    Results(Box<ScoreReport>),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Cover => "cover",
            Stage::Quiz { .. } => "quiz",
            Stage::Results(_) => "results",
        }
    }
}

/// Single source of truth for one respondent: the ledger plus the stage.
///
/// `cover -> quiz -> results`. The quiz moves one question at a time in
/// either direction; results are final and a new run needs a new session.
#[derive(Debug)]
pub struct Session {
    content: Arc<ContentStore>,
    scorer: Scorer,
    ledger: ResponseLedger,
    stage: Stage,
    advance_delay: Duration,
}

impl Session {
    pub fn new(content: Arc<ContentStore>, config: &Config) -> J16tResult<Self> {
        content.validate()?;
        let scorer = Scorer::new(config.scoring.clone())?;
        let ledger = ResponseLedger::for_content(&content);
        Ok(Self {
            content,
            scorer,
            ledger,
            stage: Stage::Cover,
            advance_delay: Duration::from_millis(config.session.advance_delay_ms),
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn ledger(&self) -> &ResponseLedger {
        &self.ledger
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Debounce a UI should wait between an answer and showing the next
    /// question.
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        match &self.stage {
            Stage::Results(report) => Some(report),
            _ => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.stage {
            Stage::Quiz { index } => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<(usize, &Question)> {
        let index = self.current_index()?;
        self.content.question(index).map(|q| (index, q))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 == self.ledger.len())
    }

    fn quiz_index(&self, action: &'static str) -> J16tResult<usize> {
        self.current_index().ok_or(J16tError::InvalidTransition {
            from: self.stage.name(),
            action,
        })
    }

    pub fn start(&mut self) -> J16tResult<()> {
        if self.stage != Stage::Cover {
            return Err(J16tError::InvalidTransition {
                from: self.stage.name(),
                action: "start",
            });
        }
        info!("📝 Questionnaire started ({} questions)", self.ledger.len());
        self.stage = Stage::Quiz { index: 0 };
        Ok(())
    }

    /// Records an answer for the current question and moves forward, except
    /// on the last question where the session waits for `finish`.
    pub fn select(&mut self, letter: Letter) -> J16tResult<()> {
        let index = self.quiz_index("answer")?;
        self.ledger.set(index, letter)?;
        if index + 1 < self.ledger.len() {
            self.stage = Stage::Quiz { index: index + 1 };
        }
        Ok(())
    }

    pub fn select_option(&mut self, option: usize) -> J16tResult<()> {
        let index = self.quiz_index("answer")?;
        let axis = self
            .ledger
            .axis(index)
            .ok_or(J16tError::QuestionOutOfRange {
                index,
                len: self.ledger.len(),
            })?;
        let letter = axis
            .letters()
            .get(option)
            .copied()
            .ok_or_else(|| J16tError::Parse(format!("option {} does not exist", option)))?;
        self.select(letter)
    }

    /// Steps back one question. A no-op on the first question.
    pub fn previous(&mut self) -> J16tResult<()> {
        let index = self.quiz_index("go back")?;
        if index > 0 {
            self.stage = Stage::Quiz { index: index - 1 };
        }
        Ok(())
    }

    pub fn can_finish(&self) -> bool {
        self.current_index().is_some() && self.ledger.is_complete()
    }

    pub fn finish(&mut self) -> J16tResult<&ScoreReport> {
        self.quiz_index("finish")?;
        let report = self.scorer.score_complete(&self.ledger)?;
        self.enter_results(report)
    }

    /// Development shortcut: random answers for every question, then results.
    pub fn dev_fill(&mut self, rng: &mut fastrand::Rng) -> J16tResult<&ScoreReport> {
        self.quiz_index("fill randomly")?;
        self.ledger.fill_random(rng);
        let report = self.scorer.score(&self.ledger);
        self.enter_results(report)
    }

    fn enter_results(&mut self, report: ScoreReport) -> J16tResult<&ScoreReport> {
        info!(
            "✅ Results: {} (converse {})",
            report.type_code, report.converse_code
        );
        self.stage = Stage::Results(Box::new(report));
        self.report().ok_or(J16tError::InvalidTransition {
            from: "results",
            action: "read report",
        })
    }
}
