use tamiz_core::models::styles::Alignment;

/// One unit of document structure, in visual order.
///
/// Backends consume blocks strictly in sequence and never reorder them.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title { text: String },
    SectionHeader { text: String },
    SubSectionHeader { text: String },
    QuestionLabel { text: String },
    AnswerText { text: String },
    /// Emphasized result line: a bold lead-in followed by the text.
    ResultText { label: String, text: String },
    Table(Table),
    /// Vertical gap, in points.
    Spacer { height_pt: f32 },
    PageBreak,
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Block::Title { text: text.into() }
    }

    pub fn section_header(text: impl Into<String>) -> Self {
        Block::SectionHeader { text: text.into() }
    }

    pub fn sub_section_header(text: impl Into<String>) -> Self {
        Block::SubSectionHeader { text: text.into() }
    }

    pub fn question(text: impl Into<String>) -> Self {
        Block::QuestionLabel { text: text.into() }
    }

    pub fn answer(text: impl Into<String>) -> Self {
        Block::AnswerText { text: text.into() }
    }

    pub fn result(label: impl Into<String>, text: impl Into<String>) -> Self {
        Block::ResultText {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn spacer(height_pt: f32) -> Self {
        Block::Spacer { height_pt }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Bordered grid, e.g. label/value pairs.
    Grid,
    /// Borderless side-by-side columns with a header row.
    Columns,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub kind: TableKind,
    pub rows: Vec<Vec<Cell>>,
    /// Relative column widths; normalized by the backend.
    pub column_widths: Vec<f32>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// One paragraph per line.
    pub lines: Vec<String>,
    pub align: Alignment,
    pub role: CellRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    Header,
    Label,
    Text,
}

impl Cell {
    pub fn new(role: CellRole, text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            align: Alignment::Left,
            role,
        }
    }

    pub fn with_lines(role: CellRole, lines: Vec<String>) -> Self {
        Self {
            lines,
            align: Alignment::Left,
            role,
        }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}
