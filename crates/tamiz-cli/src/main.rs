use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use tamiz_cli::batch::{run_batch, BatchOptions};
use tamiz_cli::ingest::read_records_from_path;
use tamiz_core::config::load_schema;
use tamiz_export::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "tamiz",
    about = "Generate one screening report per subject from a survey export",
    version
)]
struct Cli {
    /// Report schema (sections, instruments, column mapping, styles)
    #[arg(long, default_value = "config.json")]
    schema: PathBuf,

    /// CSV export with one row per subject
    #[arg(long)]
    input: PathBuf,

    /// Directory the reports are written to (created if missing)
    #[arg(long)]
    output: PathBuf,

    /// Output document format: docx or text
    #[arg(long, default_value_t = OutputFormat::Docx)]
    format: OutputFormat,

    /// Column holding each subject's unique identifier
    #[arg(long, default_value = "clave_unica")]
    id_field: String,

    /// Column holding each subject's full name
    #[arg(long, default_value = "nombre_completo")]
    name_field: String,

    /// Also write a JSON summary of the run to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Emit structured JSON logs instead of human-readable lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let schema = load_schema(&cli.schema)
        .wrap_err_with(|| format!("cannot load schema from {}", cli.schema.display()))?;
    let records = read_records_from_path(&cli.input, &schema)
        .wrap_err_with(|| format!("cannot read source data from {}", cli.input.display()))?;
    tracing::info!(records = records.len(), format = %cli.format, "starting batch");

    let options = BatchOptions {
        id_field: cli.id_field,
        name_field: cli.name_field,
        output_dir: cli.output,
    };
    let backend = cli.format.backend();
    let summary = run_batch(&schema, &records, backend.as_ref(), &options)?;

    if let Some(path) = &cli.summary {
        summary.write_json(path)?;
        tracing::info!(path = %path.display(), "summary written");
    }
    if summary.failed > 0 {
        let failed: Vec<_> = summary.failed_identifiers().collect();
        tracing::warn!(?failed, "some reports could not be generated");
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
