//! Chart projection: turns a score report into bar data for a rendering
//! surface.
//!
//! Two views are built from the same weighted scores. The primary view shows
//! one bar per axis (the winner). The paired view shows both letters of every
//! axis side by side, with the partner-aware capping rule from
//! `scorer::engine::paired_percent`.

pub mod layout;

pub use self::layout::{BandLayout, BandScale, BarRect};

use crate::config::ScoringConfig;
use crate::display;
use crate::error::J16tResult;
use crate::scorer::{engine, ScoreReport, Scorer};
use crate::types::{Axis, Letter, LetterMap};
use serde::{Deserialize, Serialize};

/// Opaque bar identifier handed to the rendering surface and echoed back on
/// interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarId(u8);

const PAIRED_FLAG: u8 = 0x10;

impl BarId {
    fn new(letter: Letter, view: ViewKind) -> Self {
        let flag = match view {
            ViewKind::Primary => 0,
            ViewKind::Paired => PAIRED_FLAG,
        };
        BarId(flag | letter.index() as u8)
    }

    pub fn letter(self) -> Letter {
        Letter::ALL[(self.0 & 0x07) as usize]
    }

    pub fn view(self) -> ViewKind {
        if self.0 & PAIRED_FLAG != 0 {
            ViewKind::Paired
        } else {
            ViewKind::Primary
        }
    }

    pub fn as_raw(self) -> u8 {
        self.0
    }

    /// Rebuilds an id a surface stored as a plain integer.
    pub fn from_raw(raw: u8) -> Option<Self> {
        (raw & !(PAIRED_FLAG | 0x07) == 0).then_some(BarId(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Primary,
    Paired,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    pub letter: Letter,
    pub percent: f64,
    pub id: BarId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryView {
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisGroup {
    pub axis: Axis,
    pub label: String,
    pub bars: [Bar; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedView {
    pub groups: [AxisGroup; 4],
}

impl PairedView {
    pub fn bar(&self, letter: Letter) -> &Bar {
        let group = &self.groups[letter.axis().position()];
        if letter.is_priority() {
            &group.bars[0]
        } else {
            &group.bars[1]
        }
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.groups.iter().flat_map(|g| g.bars.iter())
    }
}

#[derive(Debug, Clone)]
pub struct ChartProjector {
    max_scores: LetterMap<u32>,
    cap: u32,
}

impl ChartProjector {
    /// Projects with the same calibration the scorer used.
    pub fn new(scorer: &Scorer) -> Self {
        Self {
            max_scores: *scorer.max_scores(),
            cap: scorer.config().score_cap,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> J16tResult<Self> {
        config.validate()?;
        Ok(Self {
            max_scores: config.max_scores(),
            cap: config.score_cap,
        })
    }

    /// One bar per axis, in axis order, showing the winning letter at the
    /// percent the scorer resolved.
    pub fn primary(&self, report: &ScoreReport) -> PrimaryView {
        let bars = report
            .axes
            .iter()
            .map(|r| Bar {
                letter: r.winner,
                percent: r.percent,
                id: BarId::new(r.winner, ViewKind::Primary),
            })
            .collect();
        PrimaryView { bars }
    }

    /// Two bars per axis, priority letter first.
    pub fn paired(&self, report: &ScoreReport) -> PairedView {
        let bar = |letter: Letter| Bar {
            letter,
            percent: engine::paired_percent(
                report.weighted.get(letter),
                report.weighted.get(letter.partner()),
                self.max_scores[letter],
                self.cap,
            ),
            id: BarId::new(letter, ViewKind::Paired),
        };

        PairedView {
            groups: Axis::ALL.map(|axis| {
                let [a, b] = axis.letters();
                AxisGroup {
                    axis,
                    label: display::group_label(axis),
                    bars: [bar(a), bar(b)],
                }
            }),
        }
    }

    pub fn resolve(&self, id: BarId) -> Letter {
        id.letter()
    }

    /// Invokes `handler` with the letter behind a clicked bar or marker.
    pub fn dispatch<R>(&self, id: BarId, handler: impl FnOnce(Letter) -> R) -> R {
        handler(self.resolve(id))
    }
}
