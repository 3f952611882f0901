use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::mapping::ColumnMapping;
use crate::models::styles::DocumentStyles;

/// The report schema: what to print, in which order, and how.
///
/// Loaded once per run (see [`crate::config::load_schema`]) and shared
/// read-only across every subject in the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Schema version. Missing or 0 = pre-versioned file.
    #[serde(default)]
    pub config_version: u32,

    #[serde(default)]
    pub sections: Vec<Section>,

    pub evaluations: Evaluations,

    #[serde(default)]
    pub column_mapping: ColumnMapping,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<Findings>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_fields: Vec<DerivedField>,

    #[serde(default)]
    pub styles: DocumentStyles,
}

/// An ordered group of question keys printed under one heading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub keys: Vec<String>,
}

/// The three screening instruments the report always scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentId {
    Aq10,
    Asrs,
    Vinegrad,
}

impl InstrumentId {
    /// Every instrument, in report order.
    pub const ALL: [InstrumentId; 3] = [InstrumentId::Aq10, InstrumentId::Asrs, InstrumentId::Vinegrad];

    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentId::Aq10 => "aq10",
            InstrumentId::Asrs => "asrs",
            InstrumentId::Vinegrad => "vinegrad",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstrumentId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}

/// One instrument's printed title and its question keys, in item order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub title: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluations {
    pub aq10: Evaluation,
    pub asrs: Evaluation,
    pub vinegrad: Evaluation,
}

impl Evaluations {
    pub fn get(&self, id: InstrumentId) -> &Evaluation {
        match id {
            InstrumentId::Aq10 => &self.aq10,
            InstrumentId::Asrs => &self.asrs,
            InstrumentId::Vinegrad => &self.vinegrad,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (InstrumentId, &Evaluation)> {
        InstrumentId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

/// Fixed identifying fields printed as a label/value table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    pub title: String,
    pub fields: Vec<DemographicField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicField {
    pub key: String,

    /// Overrides the label resolved through `column_mapping`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Side-by-side summary of reported history items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Findings {
    pub title: String,
    pub groups: Vec<FindingsGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingsGroup {
    pub title: String,
    pub keys: Vec<String>,

    /// Also list "don't know" / "don't remember" answers.
    #[serde(default)]
    pub include_uncertain: bool,
}

/// A field computed at ingestion from whichever matching column is filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedField {
    pub key: String,

    /// Substrings identifying the candidate source columns.
    pub source_markers: Vec<String>,

    /// Value used when no column matches any marker.
    pub fallback: String,
}

/// Items each instrument is scored over.
pub fn expected_items(id: InstrumentId) -> usize {
    match id {
        InstrumentId::Aq10 => 10,
        InstrumentId::Asrs => 6,
        InstrumentId::Vinegrad => 20,
    }
}

impl Schema {
    /// Structural checks that can fail a load, plus warnings for
    /// recoverable oddities.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (id, evaluation) in self.evaluations.iter() {
            if evaluation.questions.is_empty() {
                return Err(CoreError::InvalidSchema(format!(
                    "evaluation '{id}' has no questions"
                )));
            }
            let expected = expected_items(id);
            if evaluation.questions.len() != expected {
                tracing::warn!(
                    instrument = %id,
                    expected,
                    found = evaluation.questions.len(),
                    "evaluation question count differs from the instrument's item count"
                );
            }
        }

        if let Some(findings) = &self.findings
            && findings.groups.is_empty()
        {
            return Err(CoreError::InvalidSchema(
                "findings block declares no groups".to_string(),
            ));
        }

        for derived in &self.derived_fields {
            if derived.source_markers.is_empty() {
                return Err(CoreError::InvalidSchema(format!(
                    "derived field '{}' has no source markers",
                    derived.key
                )));
            }
        }

        let unmapped = self
            .sections
            .iter()
            .flat_map(|s| &s.keys)
            .filter(|key| !self.column_mapping.contains_key(key))
            .count();
        if unmapped > 0 {
            tracing::debug!(unmapped, "section keys without column_mapping entry use derived labels");
        }

        Ok(())
    }
}
