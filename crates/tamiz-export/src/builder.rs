use std::borrow::Cow;

use tamiz_core::models::styles::Alignment;
use tamiz_core::schema::{Demographics, Findings, FindingsGroup};
use tamiz_core::{Schema, SubjectRecord};
use tamiz_instruments::get_instrument;
use tamiz_instruments::scoring::ScoreResult;

use crate::block::{Block, Cell, CellRole, Table, TableKind};

/// Placeholder line for a findings column with nothing to report.
pub const NO_FINDINGS: &str = "No se reportaron hallazgos.";

/// Value printed in the demographics table for a blank field.
pub const NO_ANSWER: &str = "Sin respuesta";

pub const INTERPRETATION_LABEL: &str = "Interpretación:";

/// Instrument question texts longer than this are cut for layout.
pub const QUESTION_DISPLAY_CHARS: usize = 80;

/// Gap after each instrument on the results page (0.8 cm).
const RESULT_GAP_PT: f32 = 22.68;

const AFFIRMATIVE_MARKER: &str = "sí";
const UNCERTAIN_MARKERS: &[&str] = &["no sé", "no recuerdo"];

/// A subject's report before rendering.
#[derive(Debug, Clone)]
pub struct Report {
    pub blocks: Vec<Block>,
    pub scores: Vec<ScoreResult>,
}

/// Assembles the block sequence for one subject from the shared schema.
pub struct ReportBuilder<'a> {
    schema: &'a Schema,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    pub fn build(&self, record: &SubjectRecord) -> Report {
        let scores = self.scores(record);
        let mut blocks = self.transcript(record);
        blocks.extend(self.results_page(&scores));
        Report { blocks, scores }
    }

    /// Score every instrument, in report order.
    pub fn scores(&self, record: &SubjectRecord) -> Vec<ScoreResult> {
        self.schema
            .evaluations
            .iter()
            .map(|(id, evaluation)| get_instrument(id).score(record, &evaluation.questions))
            .collect()
    }

    /// Part one: title, optional summary tables, then every answered question.
    pub fn transcript(&self, record: &SubjectRecord) -> Vec<Block> {
        let mapping = &self.schema.column_mapping;
        let mut blocks = vec![Block::title(&self.schema.styles.report_title)];

        if let Some(demographics) = &self.schema.demographics {
            blocks.extend(self.demographics(demographics, record));
        }
        if let Some(findings) = &self.schema.findings {
            blocks.extend(self.findings(findings, record));
        }

        for section in &self.schema.sections {
            blocks.push(Block::section_header(&section.title));
            for key in &section.keys {
                if let Some(answer) = record.answered(key) {
                    blocks.push(Block::question(mapping.label_for(key)));
                    blocks.push(Block::answer(answer));
                }
            }
        }

        for (_, evaluation) in self.schema.evaluations.iter() {
            blocks.push(Block::section_header(format!("Respuestas: {}", evaluation.title)));
            for (i, key) in evaluation.questions.iter().enumerate() {
                let Some(answer) = record.answered(key) else {
                    continue;
                };
                let text = mapping.display_text(key).unwrap_or(key);
                blocks.push(Block::question(format!(
                    "{}. {}",
                    i + 1,
                    truncate_question(text, QUESTION_DISPLAY_CHARS)
                )));
                blocks.push(Block::answer(answer));
            }
        }

        blocks
    }

    pub fn demographics(&self, demographics: &Demographics, record: &SubjectRecord) -> Vec<Block> {
        let rows = demographics
            .fields
            .iter()
            .map(|field| {
                let label = match &field.label {
                    Some(label) => Cow::Borrowed(label.as_str()),
                    None => self.schema.column_mapping.label_for(&field.key),
                };
                let value = record.answered(&field.key).unwrap_or(NO_ANSWER);
                vec![
                    Cell::new(CellRole::Label, label),
                    Cell::new(CellRole::Text, value),
                ]
            })
            .collect();

        vec![
            Block::section_header(&demographics.title),
            Block::Table(Table {
                kind: TableKind::Grid,
                rows,
                column_widths: vec![1.0, 2.0],
            }),
        ]
    }

    pub fn findings(&self, findings: &Findings, record: &SubjectRecord) -> Vec<Block> {
        let header = findings
            .groups
            .iter()
            .map(|group| Cell::new(CellRole::Header, &group.title).align(Alignment::Center))
            .collect();
        let body = findings
            .groups
            .iter()
            .map(|group| Cell::with_lines(CellRole::Text, self.findings_column(group, record)))
            .collect();

        vec![
            Block::section_header(&findings.title),
            Block::Table(Table {
                kind: TableKind::Columns,
                rows: vec![header, body],
                column_widths: vec![1.0; findings.groups.len()],
            }),
        ]
    }

    /// Bullet lines for one group; never empty.
    pub fn findings_column(&self, group: &FindingsGroup, record: &SubjectRecord) -> Vec<String> {
        let mut lines: Vec<String> = group
            .keys
            .iter()
            .filter(|key| {
                record
                    .answered(key)
                    .is_some_and(|answer| is_finding(answer, group.include_uncertain))
            })
            .map(|key| format!("\u{2022} {}", self.schema.column_mapping.label_for(key)))
            .collect();
        if lines.is_empty() {
            lines.push(NO_FINDINGS.to_string());
        }
        lines
    }

    /// Part two: always on a fresh page.
    pub fn results_page(&self, scores: &[ScoreResult]) -> Vec<Block> {
        let mut blocks = vec![
            Block::PageBreak,
            Block::title(&self.schema.styles.results_title),
        ];
        for result in scores {
            let instrument = get_instrument(result.instrument);
            let evaluation = self.schema.evaluations.get(result.instrument);
            blocks.push(Block::section_header(&evaluation.title));
            blocks.push(Block::answer(instrument.score_line(result)));
            blocks.push(Block::result(INTERPRETATION_LABEL, &result.interpretation));
            blocks.push(Block::spacer(RESULT_GAP_PT));
        }
        blocks
    }
}

/// Whether an answer belongs in a findings column.
pub fn is_finding(answer: &str, include_uncertain: bool) -> bool {
    let lowered = answer.to_lowercase();
    lowered.contains(AFFIRMATIVE_MARKER)
        || (include_uncertain && UNCERTAIN_MARKERS.iter().any(|m| lowered.contains(m)))
}

pub fn truncate_question(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
