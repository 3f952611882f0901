//! tamiz-instruments
//!
//! Scoring rules for the three screening instruments printed on every
//! report. Pure functions over a subject's answers with no I/O.
//! Cutoffs and answer markers are part of each instrument's published
//! scoring rule and are fixed here.

pub mod instruments;
pub mod scoring;

use tamiz_core::{CoreError, InstrumentId, SubjectRecord};

use crate::scoring::ScoreResult;

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    fn id(&self) -> InstrumentId;

    /// Human-readable name (e.g., "AQ-10").
    fn name(&self) -> &str;

    /// Highest attainable score; one point per item.
    fn max_score(&self) -> u32;

    /// Scores at or above this value are flagged.
    fn cutoff(&self) -> u32;

    /// Whether the answer to the 1-based `item` earns its point.
    fn item_scores(&self, item: usize, answer: &str) -> bool;

    fn flagged_interpretation(&self) -> &str;

    fn unflagged_interpretation(&self) -> &str;

    /// Score a subject over the instrument's questions, in item order.
    ///
    /// Absent answers read as empty and never score.
    fn score(&self, record: &SubjectRecord, questions: &[String]) -> ScoreResult {
        let points = questions
            .iter()
            .enumerate()
            .filter(|(i, key)| self.item_scores(i + 1, record.answer(key)))
            .count() as u32;
        let score = points.min(self.max_score());
        let flagged = score >= self.cutoff();
        let interpretation = if flagged {
            self.flagged_interpretation()
        } else {
            self.unflagged_interpretation()
        };

        ScoreResult {
            instrument: self.id(),
            score,
            max_score: self.max_score(),
            flagged,
            interpretation: interpretation.to_string(),
        }
    }

    /// The score line printed on the results page.
    fn score_line(&self, result: &ScoreResult) -> String {
        format!("Puntaje obtenido: {} de {}", result.score, result.max_score)
    }
}

/// Return all registered instruments, in report order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    InstrumentId::ALL.into_iter().map(get_instrument).collect()
}

pub fn get_instrument(id: InstrumentId) -> Box<dyn Instrument> {
    match id {
        InstrumentId::Aq10 => Box::new(instruments::aq10::Aq10),
        InstrumentId::Asrs => Box::new(instruments::asrs::Asrs),
        InstrumentId::Vinegrad => Box::new(instruments::vinegrad::Vinegrad),
    }
}

/// Look up an instrument by its schema key (e.g. "aq10").
pub fn find_instrument(id: &str) -> Result<Box<dyn Instrument>, CoreError> {
    id.parse::<InstrumentId>().map(get_instrument)
}
