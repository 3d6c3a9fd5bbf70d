pub mod loader;
mod reference;

pub use self::loader::Descriptions;

use crate::display;
use crate::error::{J16tError, J16tResult};
use crate::types::{Axis, Letter, LetterMap, TypeCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MISSING_DESCRIPTION: &str = "Description not available.";

/// A forced-choice question. Option 0 selects the priority letter of the
/// axis, option 1 its partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type", alias = "axis")]
    pub axis: Axis,
    pub text: String,
    pub options: [String; 2],
}

impl Question {
    pub fn letter_for(&self, option: usize) -> Option<Letter> {
        self.axis.letters().get(option).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterInfo {
    /// Trait word, e.g. "Extroverted".
    pub word: String,
    /// Question answered by clicking the letter's bar.
    pub prompt: String,
    pub answer: String,
    pub description: String,
    /// Bar colour as `#rrggbb`.
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTone {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeProfile {
    pub code: TypeCode,
    pub title: String,
    pub tone: ProfileTone,
}

/// Read-only content injected into the session and the report renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
    pub questions: Vec<Question>,
    pub letters: LetterMap<LetterInfo>,
    #[serde(default)]
    pub profiles: Vec<TypeProfile>,
    /// Keyed by the display form of the type code (`ESTC(J)`).
    #[serde(default)]
    pub type_descriptions: HashMap<String, String>,
}

impl ContentStore {
    /// The 80-question reference instrument.
    pub fn reference() -> Self {
        reference::build()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Question-to-axis mapping, in question order.
    pub fn axes(&self) -> Vec<Axis> {
        self.questions.iter().map(|q| q.axis).collect()
    }

    pub fn axis_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for q in &self.questions {
            counts[q.axis.position()] += 1;
        }
        counts
    }

    pub fn letter_info(&self, letter: Letter) -> &LetterInfo {
        &self.letters[letter]
    }

    pub fn profile(&self, code: &TypeCode) -> Option<&TypeProfile> {
        self.profiles.iter().find(|p| p.code == *code)
    }

    pub fn type_description(&self, code: &TypeCode) -> &str {
        self.type_descriptions
            .get(&code.display_key())
            .map(String::as_str)
            .unwrap_or(MISSING_DESCRIPTION)
    }

    pub fn letter_description(&self, letter: Letter) -> &str {
        let desc = &self.letters[letter].description;
        if desc.is_empty() {
            MISSING_DESCRIPTION
        } else {
            desc
        }
    }

    /// Merges long descriptions; later entries replace earlier ones.
    pub fn with_descriptions(mut self, descriptions: Descriptions) -> J16tResult<Self> {
        for (letter, text) in descriptions.letters {
            self.letters[letter].description = text;
        }
        for (key, text) in descriptions.types {
            let code = display::parse_type_key(&key)?;
            self.type_descriptions.insert(code.display_key(), text);
        }
        Ok(self)
    }

    pub fn validate(&self) -> J16tResult<()> {
        if self.questions.is_empty() {
            return Err(J16tError::Validation("question bank is empty".into()));
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.text.trim().is_empty() {
                return Err(J16tError::Validation(format!(
                    "question {} has no text",
                    i + 1
                )));
            }
        }
        for key in self.type_descriptions.keys() {
            display::parse_type_key(key)?;
        }
        let mut seen = Vec::with_capacity(self.profiles.len());
        for p in &self.profiles {
            if seen.contains(&p.code) {
                return Err(J16tError::Validation(format!(
                    "profile '{}' listed twice",
                    p.code
                )));
            }
            seen.push(p.code);
        }
        Ok(())
    }
}
