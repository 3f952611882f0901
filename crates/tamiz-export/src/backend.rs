use std::fmt;
use std::str::FromStr;

use tamiz_core::models::styles::{DocumentStyles, PageSize};

use crate::block::Block;
use crate::decoration::PageDecorator;
use crate::docx::DocxBackend;
use crate::error::ExportError;
use crate::text::TextBackend;

/// Everything a backend needs to produce one document.
pub struct RenderRequest<'a> {
    pub blocks: &'a [Block],
    pub page_size: PageSize,
    pub styles: &'a DocumentStyles,
    pub decorator: &'a dyn PageDecorator,
}

/// A document-rendering backend: paginates a block sequence and applies
/// the page decoration to every page.
pub trait RenderBackend {
    /// File extension of the produced documents, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Docx,
    Text,
}

impl OutputFormat {
    pub fn backend(self) -> Box<dyn RenderBackend> {
        match self {
            OutputFormat::Docx => Box::new(DocxBackend),
            OutputFormat::Text => Box::new(TextBackend::default()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Text => "text",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "docx" => Ok(OutputFormat::Docx),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}
