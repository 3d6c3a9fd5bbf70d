use super::{ContentStore, Question};
use crate::error::{J16tError, J16tResult};
use crate::types::{Axis, Letter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Long descriptive texts, keyed by letter and by display type key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Descriptions {
    pub letters: HashMap<Letter, String>,
    pub types: HashMap<String, String>,
}

impl Descriptions {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> J16tResult<Self> {
        let path = path.as_ref();
        info!("📖 Loading Descriptions: {}", path.display());
        let content = fs::read_to_string(path)?;
        let d: Descriptions = serde_json::from_str(&content)?;
        debug!(
            "   -> {} letter texts, {} type texts",
            d.letters.len(),
            d.types.len()
        );
        Ok(d)
    }
}

impl ContentStore {
    pub fn load_from_reader<R: Read>(reader: R) -> J16tResult<Self> {
        let store: ContentStore = serde_json::from_reader(reader)?;
        store.validate()?;
        Ok(store)
    }

    /// Loads a full instrument (`.json`) or a question bank (`.csv`) on top of
    /// the reference letters and profiles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> J16tResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading Content: {}", path.display());
        let file = File::open(path).map_err(|e| {
            J16tError::Validation(format!(
                "Could not open content file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        let store = if is_csv {
            let mut store = ContentStore::reference();
            store.questions = load_questions_csv(file)?;
            store.validate()?;
            store
        } else {
            ContentStore::load_from_reader(file)?
        };

        info!(
            "   -> {} questions (E/I {}, S/N {}, T/F {}, J/P {})",
            store.len(),
            store.axis_counts()[0],
            store.axis_counts()[1],
            store.axis_counts()[2],
            store.axis_counts()[3]
        );
        Ok(store)
    }

    /// Merges descriptions from `path` if it exists; otherwise keeps the
    /// fallback text.
    pub fn with_descriptions_file<P: AsRef<Path>>(self, path: P) -> J16tResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(
                "⚠️  Descriptions file '{}' not found. Using fallback text.",
                path.display()
            );
            return Ok(self);
        }
        self.with_descriptions(Descriptions::load_from_file(path)?)
    }
}

/// Reads `axis,text,option_a,option_b` rows. Bad rows are fatal, since a
/// skipped question would shift every later answer onto the wrong axis.
pub fn load_questions_csv<R: Read>(reader: R) -> J16tResult<Vec<Question>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut questions = Vec::new();
    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        if rec.len() < 4 {
            return Err(J16tError::Validation(format!(
                "row {}: expected 4 columns, found {}",
                row_idx + 1,
                rec.len()
            )));
        }
        let axis: Axis = rec[0].parse().map_err(|_| {
            J16tError::Validation(format!("row {}: unknown axis '{}'", row_idx + 1, &rec[0]))
        })?;
        questions.push(Question {
            axis,
            text: rec[1].to_string(),
            options: [rec[2].to_string(), rec[3].to_string()],
        });
    }

    debug!("   -> Parsed {} questions from CSV", questions.len());
    Ok(questions)
}
