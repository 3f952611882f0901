use tamiz_core::InstrumentId;

use crate::scoring::contains_any;
use crate::Instrument;

/// ASRS v1.1 Part A: six-item adult ADHD screener.
pub struct Asrs;

const FREQUENT_MARKERS: &[&str] = &["a menudo", "muy a menudo"];

impl Instrument for Asrs {
    fn id(&self) -> InstrumentId {
        InstrumentId::Asrs
    }

    fn name(&self) -> &str {
        "ASRS v1.1"
    }

    fn max_score(&self) -> u32 {
        6
    }

    fn cutoff(&self) -> u32 {
        4
    }

    fn item_scores(&self, _item: usize, answer: &str) -> bool {
        contains_any(answer, FREQUENT_MARKERS)
    }

    fn flagged_interpretation(&self) -> &str {
        "Sus síntomas pueden ser consistentes con TDAH del adulto. Se requiere valoración integral."
    }

    fn unflagged_interpretation(&self) -> &str {
        "Sus síntomas NO son consistentes con TDAH del adulto."
    }
}
