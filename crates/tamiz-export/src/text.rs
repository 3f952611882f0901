use tamiz_core::models::styles::Alignment;

use crate::backend::{RenderBackend, RenderRequest};
use crate::decoration::PageNumber;
use crate::error::ExportError;
use crate::layout::{align, paginate, TextGeometry};

/// Separates pages in the output (ASCII form feed).
pub const PAGE_SEPARATOR: char = '\u{c}';

/// Paged plain-text rendering.
///
/// Paginates itself, so the decorator sees every page with its concrete
/// number. Each page is the header row, a blank row, exactly
/// `geometry.rows` content rows, a blank row and the footer row.
#[derive(Debug, Clone, Default)]
pub struct TextBackend {
    /// Overrides the geometry derived from the page size and margins.
    pub geometry: Option<TextGeometry>,
}

impl TextBackend {
    pub fn with_geometry(geometry: TextGeometry) -> Self {
        Self {
            geometry: Some(geometry),
        }
    }
}

impl RenderBackend for TextBackend {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, ExportError> {
        let geometry = self
            .geometry
            .unwrap_or_else(|| TextGeometry::for_page(request.page_size, request.styles.margin_cm));
        let pages = paginate(request.blocks, request.styles, &geometry)?;

        let mut out = String::new();
        for (i, page) in pages.iter().enumerate() {
            if i > 0 {
                out.push(PAGE_SEPARATOR);
            }
            let decoration = request.decorator.decorate(PageNumber::Page(i + 1));

            out.push_str(&side_by_side(
                &decoration.header_left,
                &decoration.header_right,
                geometry.columns,
            ));
            out.push_str("\n\n");
            for row in 0..geometry.rows {
                if let Some(line) = page.lines.get(row) {
                    out.push_str(line);
                }
                out.push('\n');
            }
            out.push('\n');
            out.push_str(align(&decoration.footer_right, geometry.columns, Alignment::Right).trim_end());
            out.push('\n');
        }

        tracing::debug!(pages = pages.len(), bytes = out.len(), "rendered text report");
        Ok(out.into_bytes())
    }
}

/// Left text flush left, right text flush right, on one row.
fn side_by_side(left: &str, right: &str, columns: usize) -> String {
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    if left_len + right_len + 1 > columns {
        return format!("{left} {right}");
    }
    format!("{left}{}{right}", " ".repeat(columns - left_len - right_len))
}
