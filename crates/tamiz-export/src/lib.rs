//! tamiz-export
//!
//! Turns one subject record into a report: the builder assembles an
//! ordered block sequence, and a rendering backend paginates it (DOCX or
//! paged plain text) with a caller-supplied page decoration.

pub mod backend;
pub mod block;
pub mod builder;
pub mod decoration;
pub mod docx;
pub mod error;
pub mod layout;
pub mod render;
pub mod styles;
pub mod text;

pub use crate::backend::{OutputFormat, RenderBackend};
pub use crate::block::Block;
pub use crate::builder::ReportBuilder;
pub use crate::decoration::{PageDecorator, SubjectBanner};
pub use crate::error::ExportError;
pub use crate::render::render_subject;
