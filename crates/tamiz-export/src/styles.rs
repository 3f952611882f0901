use tamiz_core::models::styles::{ParagraphStyle, ParagraphStyles};

use crate::block::{Block, CellRole};

pub const POINTS_PER_CM: f32 = 72.0 / 2.54;

/// OOXML measures lengths in twentieths of a point.
pub fn pt_to_twips(pt: f32) -> u32 {
    (pt * 20.0).round().max(0.0) as u32
}

pub fn cm_to_twips(cm: f32) -> i32 {
    (cm * POINTS_PER_CM * 20.0).round() as i32
}

/// OOXML font sizes are half-points.
pub fn half_points(pt: f32) -> usize {
    (pt * 2.0).round().max(2.0) as usize
}

/// The named paragraph styles every backend must support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    Title,
    SectionHeader,
    SubSectionHeader,
    Question,
    Answer,
    Result,
    ColumnHeader,
    ColumnText,
}

impl StyleRole {
    pub const ALL: [StyleRole; 8] = [
        StyleRole::Title,
        StyleRole::SectionHeader,
        StyleRole::SubSectionHeader,
        StyleRole::Question,
        StyleRole::Answer,
        StyleRole::Result,
        StyleRole::ColumnHeader,
        StyleRole::ColumnText,
    ];

    /// Style for a paragraph block; tables, spacers and breaks have none.
    pub fn of(block: &Block) -> Option<Self> {
        match block {
            Block::Title { .. } => Some(StyleRole::Title),
            Block::SectionHeader { .. } => Some(StyleRole::SectionHeader),
            Block::SubSectionHeader { .. } => Some(StyleRole::SubSectionHeader),
            Block::QuestionLabel { .. } => Some(StyleRole::Question),
            Block::AnswerText { .. } => Some(StyleRole::Answer),
            Block::ResultText { .. } => Some(StyleRole::Result),
            Block::Table(_) | Block::Spacer { .. } | Block::PageBreak => None,
        }
    }

    pub fn for_cell(role: CellRole) -> Self {
        match role {
            CellRole::Header | CellRole::Label => StyleRole::ColumnHeader,
            CellRole::Text => StyleRole::ColumnText,
        }
    }

    /// Identifier used for the DOCX style part.
    pub fn style_id(self) -> &'static str {
        match self {
            StyleRole::Title => "Title",
            StyleRole::SectionHeader => "SectionTitle",
            StyleRole::SubSectionHeader => "SubSectionTitle",
            StyleRole::Question => "Question",
            StyleRole::Answer => "Answer",
            StyleRole::Result => "Result",
            StyleRole::ColumnHeader => "ColumnHeader",
            StyleRole::ColumnText => "ColumnText",
        }
    }

    pub fn resolve(self, styles: &ParagraphStyles) -> &ParagraphStyle {
        match self {
            StyleRole::Title => &styles.title,
            StyleRole::SectionHeader => &styles.section_header,
            StyleRole::SubSectionHeader => &styles.sub_section_header,
            StyleRole::Question => &styles.question,
            StyleRole::Answer => &styles.answer,
            StyleRole::Result => &styles.result,
            StyleRole::ColumnHeader => &styles.column_header,
            StyleRole::ColumnText => &styles.column_text,
        }
    }
}

/// Upper-case RGB hex without `#`, falling back to black on bad input.
pub fn normalize_color(color: &str) -> String {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        hex.to_ascii_uppercase()
    } else {
        tracing::warn!(color, "invalid style color, using black");
        "000000".to_string()
    }
}
