use tamiz_core::{Schema, SubjectRecord};
use tamiz_instruments::scoring::ScoreResult;

use crate::backend::{RenderBackend, RenderRequest};
use crate::builder::ReportBuilder;
use crate::decoration::PageDecorator;
use crate::error::ExportError;

/// A rendered subject document plus the scores printed in it.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub scores: Vec<ScoreResult>,
}

/// Build the block sequence for `record` and render it with `backend`.
pub fn render_subject(
    schema: &Schema,
    record: &SubjectRecord,
    decorator: &dyn PageDecorator,
    backend: &dyn RenderBackend,
) -> Result<RenderedReport, ExportError> {
    let report = ReportBuilder::new(schema).build(record);
    let request = RenderRequest {
        blocks: &report.blocks,
        page_size: schema.styles.page_size,
        styles: &schema.styles,
        decorator,
    };
    let bytes = backend.render(&request)?;
    Ok(RenderedReport {
        bytes,
        scores: report.scores,
    })
}
