use tamiz_core::InstrumentId;

use crate::scoring::{equals_token, ScoreResult};
use crate::Instrument;

/// Vinegrad Revised Adult Dyslexia Checklist, 20 yes/no items.
///
/// Unlike the Likert instruments, only an exact "sí" counts.
pub struct Vinegrad;

const AFFIRMATIVE: &str = "sí";

impl Instrument for Vinegrad {
    fn id(&self) -> InstrumentId {
        InstrumentId::Vinegrad
    }

    fn name(&self) -> &str {
        "Vinegrad"
    }

    fn max_score(&self) -> u32 {
        20
    }

    fn cutoff(&self) -> u32 {
        9
    }

    fn item_scores(&self, _item: usize, answer: &str) -> bool {
        equals_token(answer, AFFIRMATIVE)
    }

    fn flagged_interpretation(&self) -> &str {
        "CON riesgo de dificultades lectoras. Se sugiere evaluación especializada."
    }

    fn unflagged_interpretation(&self) -> &str {
        "SIN riesgo de dificultades lectoras."
    }

    fn score_line(&self, result: &ScoreResult) -> String {
        format!(
            "Puntaje obtenido: {} de {} respuestas afirmativas",
            result.score, result.max_score
        )
    }
}
