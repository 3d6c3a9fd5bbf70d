use crate::error::{J16tError, J16tResult};
use crate::types::{Letter, LetterMap};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound for `ei_weight`.
pub const MAX_EI_WEIGHT: u32 = 16;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub scoring: ScoringConfig,
    #[command(flatten)]
    pub session: SessionParams,
}

/// Calibration constants for the reference instrument.
///
/// The max scores are normalization denominators only; they never cap a
/// weighted score. `score_cap` bounds how much of a weighted score is shown.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    // === MAX SCORES (percent denominators) ===
    #[arg(long, default_value_t = 22)]
    pub max_score_e: u32,
    #[arg(long, default_value_t = 22)]
    pub max_score_i: u32,
    #[arg(long, default_value_t = 23)]
    pub max_score_s: u32,
    #[arg(long, default_value_t = 23)]
    pub max_score_n: u32,
    #[arg(long, default_value_t = 23)]
    pub max_score_t: u32,
    #[arg(long, default_value_t = 23)]
    pub max_score_f: u32,
    #[arg(long, default_value_t = 23)]
    pub max_score_j: u32,
    #[arg(long, default_value_t = 23)]
    pub max_score_p: u32,

    // === DISPLAY CAP ===
    #[arg(long, default_value_t = 20)]
    pub score_cap: u32,

    // E/I has fewer questions than the other axes
    #[arg(long, default_value_t = 2)]
    pub ei_weight: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_score_e: 22,
            max_score_i: 22,
            max_score_s: 23,
            max_score_n: 23,
            max_score_t: 23,
            max_score_f: 23,
            max_score_j: 23,
            max_score_p: 23,
            score_cap: 20,
            ei_weight: 2,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    /// Pause between an answer and the next question, so the selection registers.
    #[arg(long, default_value_t = 200)]
    pub advance_delay_ms: u64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            advance_delay_ms: 200,
        }
    }
}

impl Config {
    /// Reads settings only. Callers validate once CLI overrides are merged.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> J16tResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            J16tError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl ScoringConfig {
    pub fn max_scores(&self) -> LetterMap<u32> {
        LetterMap::from_fn(|l| self.max_score(l))
    }

    pub fn max_score(&self, letter: Letter) -> u32 {
        match letter {
            Letter::E => self.max_score_e,
            Letter::I => self.max_score_i,
            Letter::S => self.max_score_s,
            Letter::N => self.max_score_n,
            Letter::T => self.max_score_t,
            Letter::F => self.max_score_f,
            Letter::J => self.max_score_j,
            Letter::P => self.max_score_p,
        }
    }

    #[inline(always)]
    pub fn weight(&self, letter: Letter) -> u32 {
        match letter {
            Letter::E | Letter::I => self.ei_weight,
            _ => 1,
        }
    }

    /// Rejects tables that would divide by zero or push a percent past 100.
    pub fn validate(&self) -> J16tResult<()> {
        if self.score_cap == 0 {
            return Err(J16tError::Config("score_cap must be positive".into()));
        }
        if self.ei_weight == 0 || self.ei_weight > MAX_EI_WEIGHT {
            return Err(J16tError::Config(format!(
                "ei_weight must be between 1 and {}",
                MAX_EI_WEIGHT
            )));
        }
        for (letter, &max) in self.max_scores().iter() {
            if max == 0 {
                return Err(J16tError::Config(format!(
                    "max score for '{}' must be positive",
                    letter
                )));
            }
            if max < self.score_cap {
                return Err(J16tError::Config(format!(
                    "max score for '{}' ({}) is below the score cap ({})",
                    letter, max, self.score_cap
                )));
            }
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &ScoringConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(max_score_e, "max_score_e");
        update_if_present!(max_score_i, "max_score_i");
        update_if_present!(max_score_s, "max_score_s");
        update_if_present!(max_score_n, "max_score_n");
        update_if_present!(max_score_t, "max_score_t");
        update_if_present!(max_score_f, "max_score_f");
        update_if_present!(max_score_j, "max_score_j");
        update_if_present!(max_score_p, "max_score_p");

        update_if_present!(score_cap, "score_cap");
        update_if_present!(ei_weight, "ei_weight");
    }
}

impl SessionParams {
    pub fn merge_from_cli(&mut self, cli: &SessionParams, matches: &ArgMatches) {
        if matches.value_source("advance_delay_ms") == Some(ValueSource::CommandLine) {
            self.advance_delay_ms = cli.advance_delay_ms;
        }
    }
}
