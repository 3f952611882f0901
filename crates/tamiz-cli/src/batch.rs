use std::path::{Path, PathBuf};

use serde::Serialize;
use tamiz_core::{Schema, SubjectRecord};
use tamiz_export::{render_subject, RenderBackend, SubjectBanner};
use tamiz_instruments::scoring::ScoreResult;

use crate::error::{format_err_chain, BatchError};

/// Shown in the page header when a subject has no name.
const UNKNOWN_NAME: &str = "N/A";

/// Characters that cannot appear in an output file name.
const FORBIDDEN_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Record key holding the subject's unique identifier.
    pub id_field: String,
    /// Record key holding the subject's full name.
    pub name_field: String,
    pub output_dir: PathBuf,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            id_field: "clave_unica".to_string(),
            name_field: "nombre_completo".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectOutcome {
    /// 1-based row position in the batch.
    pub position: usize,
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubjectOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Records seen, successful or not.
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub subjects: Vec<SubjectOutcome>,
}

impl BatchSummary {
    pub fn failed_identifiers(&self) -> impl Iterator<Item = &str> {
        self.subjects
            .iter()
            .filter(|s| !s.succeeded())
            .map(|s| s.identifier.as_str())
    }

    pub fn write_json(&self, path: &Path) -> Result<(), BatchError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| BatchError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Render one document per record into `options.output_dir`.
///
/// Only an unusable output directory aborts the run; any failure for a
/// single subject is logged and the batch moves on.
pub fn run_batch<'r, I>(
    schema: &Schema,
    records: I,
    backend: &dyn RenderBackend,
    options: &BatchOptions,
) -> Result<BatchSummary, BatchError>
where
    I: IntoIterator<Item = &'r SubjectRecord>,
{
    std::fs::create_dir_all(&options.output_dir).map_err(|source| BatchError::OutputDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let mut subjects = Vec::new();
    for (i, record) in records.into_iter().enumerate() {
        let position = i + 1;
        let identifier = subject_identifier(record, &options.id_field, position);
        let span = tracing::info_span!("subject", id = %identifier, position);
        let _guard = span.enter();

        tracing::info!("generating report");
        let outcome = match process_subject(schema, record, &identifier, backend, options) {
            Ok((file, scores)) => {
                tracing::info!(file = %file.display(), "report written");
                SubjectOutcome {
                    position,
                    identifier,
                    file: Some(file),
                    scores,
                    error: None,
                }
            }
            Err(e) => {
                let detail = format_err_chain(&e);
                tracing::error!(error = %detail, "report generation failed");
                SubjectOutcome {
                    position,
                    identifier,
                    file: None,
                    scores: Vec::new(),
                    error: Some(detail),
                }
            }
        };
        subjects.push(outcome);
    }

    let succeeded = subjects.iter().filter(|s| s.succeeded()).count();
    let summary = BatchSummary {
        total: subjects.len(),
        succeeded,
        failed: subjects.len() - succeeded,
        subjects,
    };
    tracing::info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}

fn process_subject(
    schema: &Schema,
    record: &SubjectRecord,
    identifier: &str,
    backend: &dyn RenderBackend,
    options: &BatchOptions,
) -> Result<(PathBuf, Vec<ScoreResult>), BatchError> {
    let name = record.answered(&options.name_field).unwrap_or(UNKNOWN_NAME);
    let banner = SubjectBanner::new(&schema.styles.header_text, name.trim(), identifier);

    let rendered = render_subject(schema, record, &banner, backend)?;

    let path = options
        .output_dir
        .join(output_file_name(identifier, backend.extension()));
    std::fs::write(&path, &rendered.bytes).map_err(|source| BatchError::Write {
        path: path.clone(),
        source,
    })?;
    Ok((path, rendered.scores))
}

/// The subject's identifier, or `registro_<position>` when it has none.
pub fn subject_identifier(record: &SubjectRecord, id_field: &str, position: usize) -> String {
    record
        .answered(id_field)
        .and_then(normalize_identifier)
        .unwrap_or_else(|| format!("registro_{position}"))
}

/// Trim, drop the `.0` a numeric cell picks up on export, and make the
/// result safe to use as a file name.
pub fn normalize_identifier(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix(".0").unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace(FORBIDDEN_FILENAME_CHARS, "_"))
}

pub fn output_file_name(identifier: &str, extension: &str) -> String {
    format!("{identifier}.{extension}")
}
