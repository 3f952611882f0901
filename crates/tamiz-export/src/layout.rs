//! Character-grid pagination.
//!
//! Lays a block sequence out on fixed-size pages of monospaced rows. Font
//! metrics are approximated: one average glyph is ~0.54 em of a 10 pt
//! body font and one row is 12 pt of vertical space.

use tamiz_core::models::styles::{Alignment, DocumentStyles, PageSize, ParagraphStyle};

use crate::block::{Block, Cell, Table, TableKind};
use crate::error::ExportError;
use crate::styles::{StyleRole, POINTS_PER_CM};

const GLYPH_WIDTH_PT: f32 = 5.4;
const ROW_HEIGHT_PT: f32 = 12.0;
const COLUMN_GAP: usize = 2;
const MIN_COLUMNS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextGeometry {
    /// Characters per content row.
    pub columns: usize,
    /// Content rows per page, excluding header and footer.
    pub rows: usize,
    pub chars_per_cm: f32,
}

impl TextGeometry {
    pub fn for_page(size: PageSize, margin_cm: f32) -> Self {
        let (width, height) = size.dimensions_pt();
        let margin = margin_cm * POINTS_PER_CM;
        let content_width = (width - 2.0 * margin).max(GLYPH_WIDTH_PT);
        let content_height = (height - 2.0 * margin).max(ROW_HEIGHT_PT);
        let columns = (content_width / GLYPH_WIDTH_PT).floor() as usize;
        Self {
            columns,
            rows: (content_height / ROW_HEIGHT_PT).floor() as usize,
            chars_per_cm: columns as f32 / (content_width / POINTS_PER_CM),
        }
    }

    fn check(&self) -> Result<(), ExportError> {
        if self.columns < MIN_COLUMNS || self.rows < 4 {
            return Err(ExportError::Layout(format!(
                "page too small: {} columns x {} rows",
                self.columns, self.rows
            )));
        }
        Ok(())
    }
}

/// Rows of one laid-out page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub lines: Vec<String>,
}

/// Lay out every block; a `PageBreak` always opens a new page.
pub fn paginate(
    blocks: &[Block],
    styles: &DocumentStyles,
    geometry: &TextGeometry,
) -> Result<Vec<Page>, ExportError> {
    geometry.check()?;
    let mut paginator = Paginator::new(*geometry);

    for block in blocks {
        match block {
            Block::PageBreak => paginator.break_page(),
            Block::Spacer { height_pt } => paginator.push_gap(rows_for(*height_pt).max(1)),
            Block::Table(table) => {
                for line in table_lines(table, geometry.columns)? {
                    paginator.push_line(line);
                }
            }
            Block::Title { text }
            | Block::SectionHeader { text }
            | Block::SubSectionHeader { text }
            | Block::QuestionLabel { text }
            | Block::AnswerText { text } => {
                let role = StyleRole::of(block).unwrap_or(StyleRole::Answer);
                paginator.push_paragraph(text, role.resolve(&styles.paragraphs));
            }
            Block::ResultText { label, text } => {
                let style = StyleRole::Result.resolve(&styles.paragraphs);
                paginator.push_paragraph(&format!("{label} {text}"), style);
            }
        }
    }

    Ok(paginator.finish())
}

struct Paginator {
    geometry: TextGeometry,
    pages: Vec<Page>,
    current: Vec<String>,
}

impl Paginator {
    fn new(geometry: TextGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    fn push_line(&mut self, line: String) {
        if self.current.len() >= self.geometry.rows {
            self.break_page();
        }
        self.current.push(line);
    }

    /// Blank rows, dropped at the top of a page.
    fn push_gap(&mut self, rows: usize) {
        for _ in 0..rows {
            if self.current.is_empty() || self.current.len() >= self.geometry.rows {
                return;
            }
            self.current.push(String::new());
        }
    }

    fn push_paragraph(&mut self, text: &str, style: &ParagraphStyle) {
        let columns = self.geometry.columns;
        let indent = ((style.left_indent_cm * self.geometry.chars_per_cm).round() as usize)
            .min(columns / 2);
        let width = columns - indent;

        self.push_gap(rows_for(style.space_before_pt));
        for line in wrap(text, width) {
            let placed = align(&line, width, style.align);
            self.push_line(format!("{}{}", " ".repeat(indent), placed).trim_end().to_string());
        }
        if style.bottom_rule {
            self.push_line("-".repeat(columns));
        }
        self.push_gap(rows_for(style.space_after_pt));
    }

    fn break_page(&mut self) {
        let mut finished = std::mem::take(&mut self.current);
        while finished.last().is_some_and(|l| l.is_empty()) {
            finished.pop();
        }
        self.pages.push(Page { lines: finished });
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.break_page();
        }
        self.pages
    }
}

fn rows_for(points: f32) -> usize {
    (points / ROW_HEIGHT_PT).round().max(0.0) as usize
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Pad `text` to `width` according to `alignment`.
pub fn align(text: &str, width: usize, alignment: Alignment) -> String {
    let len = text.chars().count();
    let slack = width.saturating_sub(len);
    match alignment {
        Alignment::Left | Alignment::Justify => format!("{text}{}", " ".repeat(slack)),
        Alignment::Right => format!("{}{text}", " ".repeat(slack)),
        Alignment::Center => {
            let left = slack / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(slack - left))
        }
    }
}

/// Character widths for each column, filling `available`.
fn column_widths(table: &Table, available: usize) -> Vec<usize> {
    let total: f32 = table.column_widths.iter().map(|w| w.max(0.0)).sum();
    let count = table.column_count().max(1);
    table
        .column_widths
        .iter()
        .map(|w| {
            let share = if total > 0.0 { w.max(0.0) / total } else { 1.0 / count as f32 };
            ((available as f32 * share).floor() as usize).max(1)
        })
        .collect()
}

fn cell_lines(cell: &Cell, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = cell
        .lines
        .iter()
        .flat_map(|line| wrap(line, width))
        .map(|line| align(&line, width, cell.align))
        .collect();
    if lines.is_empty() {
        lines.push(" ".repeat(width));
    }
    lines
}

pub fn table_lines(table: &Table, columns: usize) -> Result<Vec<String>, ExportError> {
    let count = table.column_count();
    if let Some(row) = table.rows.iter().find(|row| row.len() != count) {
        return Err(ExportError::TableShape {
            cells: row.len(),
            columns: count,
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let chrome = match table.kind {
        // "| a | b |": one border per column plus the closing one, two pads each
        TableKind::Grid => 3 * count + 1,
        TableKind::Columns => COLUMN_GAP * (count - 1),
    };
    let widths = column_widths(table, columns.saturating_sub(chrome).max(count));

    let rule: String = match table.kind {
        TableKind::Grid => {
            let mut rule = String::from("+");
            for w in &widths {
                rule.push_str(&"-".repeat(w + 2));
                rule.push('+');
            }
            rule
        }
        TableKind::Columns => widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(&" ".repeat(COLUMN_GAP)),
    };

    let mut out = Vec::new();
    if table.kind == TableKind::Grid {
        out.push(rule.clone());
    }
    for (r, row) in table.rows.iter().enumerate() {
        let wrapped: Vec<Vec<String>> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| cell_lines(cell, w))
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        for i in 0..height {
            let parts: Vec<String> = wrapped
                .iter()
                .zip(&widths)
                .map(|(lines, &w)| lines.get(i).cloned().unwrap_or_else(|| " ".repeat(w)))
                .collect();
            let line = match table.kind {
                TableKind::Grid => format!("| {} |", parts.join(" | ")),
                TableKind::Columns => parts.join(&" ".repeat(COLUMN_GAP)),
            };
            out.push(line.trim_end().to_string());
        }

        match table.kind {
            TableKind::Grid => out.push(rule.clone()),
            TableKind::Columns if r == 0 => out.push(rule.clone()),
            TableKind::Columns => {}
        }
    }
    Ok(out)
}
