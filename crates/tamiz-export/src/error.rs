use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("layout failed: {0}")]
    Layout(String),

    #[error("unknown output format: {0} (expected docx or text)")]
    UnknownFormat(String),

    #[error("table has {cells} cells in a row but {columns} column widths")]
    TableShape { cells: usize, columns: usize },
}
