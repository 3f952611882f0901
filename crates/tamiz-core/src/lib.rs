//! tamiz-core
//!
//! Pure domain types shared by the screening pipeline: the report schema,
//! the question/key mapping, subject records, and document styles.
//! No rendering or I/O beyond loading the schema file.

pub mod config;
pub mod error;
pub mod mapping;
pub mod models;
pub mod schema;

pub use crate::error::CoreError;
pub use crate::mapping::ColumnMapping;
pub use crate::models::record::SubjectRecord;
pub use crate::schema::{InstrumentId, Schema};
