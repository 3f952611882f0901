use std::io::Cursor;

use docx_rs::{
    AlignmentType, BorderType, BreakType, Docx, FieldCharType, Footer, Header, InstrPAGE,
    InstrText, LineSpacing, PageMargin, Paragraph, ParagraphBorder, ParagraphBorderPosition,
    Run, RunFonts, Style, StyleType, Table, TableCell, TableRow, WidthType,
};
use tamiz_core::models::styles::{Alignment, DocumentStyles, ParagraphStyle};

use crate::backend::{RenderBackend, RenderRequest};
use crate::block::{Block, Cell, Table as BlockTable, TableKind};
use crate::decoration::{PageNumber, PAGE_FIELD};
use crate::error::ExportError;
use crate::styles::{cm_to_twips, half_points, normalize_color, pt_to_twips, StyleRole};

/// DOCX rendering via `docx-rs`.
///
/// The word processor performs final pagination, so the decorator is asked
/// once for a [`PageNumber::Running`] decoration; its page placeholder is
/// emitted as a `PAGE` field that Word fills in on every page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxBackend;

/// Paragraph rule width in eighths of a point (0.5 pt).
const RULE_SIZE: usize = 4;

impl RenderBackend for DocxBackend {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, ExportError> {
        let styles = request.styles;
        let (width_pt, height_pt) = request.page_size.dimensions_pt();
        let margin = cm_to_twips(styles.margin_cm);
        let content_width = (pt_to_twips(width_pt) as i32 - 2 * margin).max(1) as usize;

        let mut docx = Docx::new()
            .page_size(pt_to_twips(width_pt), pt_to_twips(height_pt))
            .page_margin(
                PageMargin::new()
                    .top(margin)
                    .bottom(margin)
                    .left(margin)
                    .right(margin)
                    .header(cm_to_twips(styles.margin_cm * 0.6))
                    .footer(cm_to_twips(styles.margin_cm * 0.6)),
            );

        for role in StyleRole::ALL {
            let style = role.resolve(&styles.paragraphs);
            docx = docx.add_style(
                Style::new(role.style_id(), StyleType::Paragraph)
                    .name(role.style_id())
                    .size(half_points(style.size_pt)),
            );
        }

        let decoration = request.decorator.decorate(PageNumber::Running);
        docx = docx
            .header(
                Header::new()
                    .add_paragraph(decoration_paragraph(&decoration.header_left, AlignmentType::Left, styles))
                    .add_paragraph(decoration_paragraph(&decoration.header_right, AlignmentType::Right, styles)),
            )
            .footer(Footer::new().add_paragraph(footer_paragraph(&decoration.footer_right, styles)));

        for block in request.blocks {
            docx = match block {
                Block::PageBreak => docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
                ),
                Block::Spacer { height_pt } => docx.add_paragraph(
                    Paragraph::new().line_spacing(LineSpacing::new().before(0).after(pt_to_twips(*height_pt))),
                ),
                Block::Table(table) => docx.add_table(table_element(table, content_width, styles)?),
                Block::ResultText { label, text } => {
                    let role = StyleRole::Result;
                    let style = role.resolve(&styles.paragraphs);
                    let lead = styled_run(label, style, styles).bold();
                    let body = styled_run(&format!(" {text}"), style, styles);
                    docx.add_paragraph(paragraph_frame(role, style).add_run(lead).add_run(body))
                }
                Block::Title { text }
                | Block::SectionHeader { text }
                | Block::SubSectionHeader { text }
                | Block::QuestionLabel { text }
                | Block::AnswerText { text } => {
                    let role = StyleRole::of(block).unwrap_or(StyleRole::Answer);
                    let style = role.resolve(&styles.paragraphs);
                    docx.add_paragraph(
                        paragraph_frame(role, style).add_run(styled_run(text, style, styles)),
                    )
                }
            };
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| ExportError::Docx(e.to_string()))?;

        let bytes = buf.into_inner();
        tracing::debug!(blocks = request.blocks.len(), bytes = bytes.len(), "rendered docx report");
        Ok(bytes)
    }
}

fn alignment(align: Alignment) -> AlignmentType {
    match align {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

/// Paragraph carrying a style's layout attributes, without runs.
fn paragraph_frame(role: StyleRole, style: &ParagraphStyle) -> Paragraph {
    let mut para = Paragraph::new()
        .style(role.style_id())
        .align(alignment(style.align))
        .line_spacing(
            LineSpacing::new()
                .before(pt_to_twips(style.space_before_pt))
                .after(pt_to_twips(style.space_after_pt)),
        );
    if style.left_indent_cm > 0.0 {
        para = para.indent(Some(cm_to_twips(style.left_indent_cm)), None, None, None);
    }
    if style.bottom_rule {
        para.property = para.property.set_border(
            ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                .val(BorderType::Single)
                .size(RULE_SIZE)
                .space(1)
                .color(normalize_color(&style.color)),
        );
    }
    para
}

fn styled_run(text: &str, style: &ParagraphStyle, styles: &DocumentStyles) -> Run {
    let run = Run::new()
        .add_text(text)
        .size(half_points(style.size_pt))
        .color(normalize_color(&style.color))
        .fonts(RunFonts::new().ascii(&styles.body_font));
    if style.bold { run.bold() } else { run }
}

fn decoration_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(half_points(styles.decoration_size_pt))
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

fn decoration_paragraph(text: &str, align: AlignmentType, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(align).add_run(decoration_run(text, styles))
}

/// Footer text with the page placeholder replaced by a `PAGE` field.
fn footer_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Right);
    let Some((before, after)) = text.split_once(PAGE_FIELD) else {
        return para.add_run(decoration_run(text, styles));
    };

    if !before.is_empty() {
        para = para.add_run(decoration_run(before, styles));
    }
    let size = half_points(styles.decoration_size_pt);
    para = para
        .add_run(Run::new().add_field_char(FieldCharType::Begin, false))
        .add_run(Run::new().add_instr_text(InstrText::PAGE(InstrPAGE::new())))
        .add_run(Run::new().add_field_char(FieldCharType::Separate, false))
        .add_run(Run::new().add_text("1").size(size))
        .add_run(Run::new().add_field_char(FieldCharType::End, false));
    if !after.is_empty() {
        para = para.add_run(decoration_run(after, styles));
    }
    para
}

fn table_element(
    table: &BlockTable,
    content_width: usize,
    styles: &DocumentStyles,
) -> Result<Table, ExportError> {
    let count = table.column_count();
    if let Some(row) = table.rows.iter().find(|row| row.len() != count) {
        return Err(ExportError::TableShape {
            cells: row.len(),
            columns: count,
        });
    }

    let total: f32 = table.column_widths.iter().map(|w| w.max(0.0)).sum();
    let grid: Vec<usize> = table
        .column_widths
        .iter()
        .map(|w| {
            let share = if total > 0.0 { w.max(0.0) / total } else { 1.0 / count.max(1) as f32 };
            (content_width as f32 * share).round() as usize
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| {
            TableRow::new(
                row.iter()
                    .zip(&grid)
                    .map(|(cell, &width)| table_cell(cell, width, styles))
                    .collect(),
            )
        })
        .collect();

    let element = Table::new(rows).set_grid(grid);
    Ok(match table.kind {
        TableKind::Grid => element,
        TableKind::Columns => element.clear_all_border(),
    })
}

fn table_cell(cell: &Cell, width: usize, styles: &DocumentStyles) -> TableCell {
    let role = StyleRole::for_cell(cell.role);
    let style = role.resolve(&styles.paragraphs);
    let mut element = TableCell::new().width(width, WidthType::Dxa);
    // A cell must hold at least one paragraph.
    if cell.lines.is_empty() {
        return element.add_paragraph(Paragraph::new());
    }
    for line in &cell.lines {
        element = element.add_paragraph(
            Paragraph::new()
                .style(role.style_id())
                .align(alignment(cell.align))
                .add_run(styled_run(line, style, styles)),
        );
    }
    element
}
