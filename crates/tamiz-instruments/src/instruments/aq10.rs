use tamiz_core::InstrumentId;

use crate::scoring::contains_any;
use crate::Instrument;

/// AQ-10: Autism Spectrum Quotient, 10-item adult screener.
/// Items 1, 7, 8 and 10 score on agreement; the rest on disagreement.
pub struct Aq10;

const AGREEMENT_ITEMS: [usize; 4] = [1, 7, 8, 10];
const AGREEMENT_MARKERS: &[&str] = &["(3)", "de acuerdo"];
const DISAGREEMENT_MARKERS: &[&str] = &["(1)", "(2)", "desacuerdo"];

impl Instrument for Aq10 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Aq10
    }

    fn name(&self) -> &str {
        "AQ-10"
    }

    fn max_score(&self) -> u32 {
        10
    }

    fn cutoff(&self) -> u32 {
        6
    }

    fn item_scores(&self, item: usize, answer: &str) -> bool {
        if AGREEMENT_ITEMS.contains(&item) {
            contains_any(answer, AGREEMENT_MARKERS)
        } else {
            contains_any(answer, DISAGREEMENT_MARKERS)
        }
    }

    fn flagged_interpretation(&self) -> &str {
        "Puntaje sugestivo. Se recomienda una valoración más profunda por un especialista."
    }

    fn unflagged_interpretation(&self) -> &str {
        "Puntaje dentro del rango esperado."
    }
}
