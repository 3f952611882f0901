use serde::Serialize;
use tamiz_core::InstrumentId;

/// Outcome of scoring one instrument for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub instrument: InstrumentId,
    pub score: u32,
    pub max_score: u32,
    /// Whether the score reached the instrument's cutoff.
    pub flagged: bool,
    pub interpretation: String,
}

/// Case-insensitive, loose containment: any marker substring counts.
pub fn contains_any(answer: &str, markers: &[&str]) -> bool {
    let lowered = answer.to_lowercase();
    markers.iter().any(|marker| lowered.contains(marker))
}

/// Trimmed, case-insensitive whole-answer comparison.
pub fn equals_token(answer: &str, token: &str) -> bool {
    answer.trim().to_lowercase() == token
}
