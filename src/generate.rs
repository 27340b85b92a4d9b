//! Generate command handler.

use crate::args::GenerateArgs;
use anyhow::Context;
use schema_core::Schema;
use schema_randomizer::{GenerationReport, SchemaRandomizer};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of reports written.
    pub reports_written: u64,
    /// Keys visited across all reports.
    pub keys_visited: u64,
    /// Warning diagnostics across all reports.
    pub warnings: u64,
    /// Error diagnostics across all reports.
    pub errors: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl GenerateMetrics {
    fn record(&mut self, report: &GenerationReport) {
        self.reports_written += 1;
        self.keys_visited += report.size as u64;
        self.warnings += report.warnings().count() as u64;
        self.errors += report.errors().count() as u64;
    }
}

/// Load the schema named by the arguments.
pub fn load_schema(args: &GenerateArgs) -> anyhow::Result<Schema> {
    let content = if args.reads_stdin() {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read schema from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.schema)
            .with_context(|| format!("Failed to read schema file: {:?}", args.schema))?
    };

    args.format.resolve(&args.schema).parse(&content)
}

/// Generate `count` reports for `schema` and write them as JSON.
///
/// Compact reports are written one per line; pretty reports are separated by
/// a newline.
pub fn write_reports<W: Write>(
    schema: &Schema,
    count: u64,
    pretty: bool,
    writer: &mut W,
) -> anyhow::Result<GenerateMetrics> {
    let start = Instant::now();
    let randomizer = SchemaRandomizer::new();
    let mut metrics = GenerateMetrics::default();

    for index in 0..count {
        let report = randomizer.generate(schema);
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, &report)?;
        } else {
            serde_json::to_writer(&mut *writer, &report)?;
        }
        writeln!(writer)?;

        debug!(index, size = report.size, "Wrote report");
        metrics.record(&report);
    }

    writer.flush()?;
    metrics.total_duration = start.elapsed();
    Ok(metrics)
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<GenerateMetrics> {
    info!("Generating random values from schema: {:?}", args.schema);

    let schema = load_schema(&args)?;
    info!(
        "Schema has {} top-level keys ({} total)",
        schema.len(),
        schema.key_count()
    );

    let metrics = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path:?}"))?;
            let mut writer = BufWriter::new(file);
            write_reports(&schema, args.count, args.pretty, &mut writer)?
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_reports(&schema, args.count, args.pretty, &mut writer)?
        }
    };

    info!(
        "Generated {} reports ({} keys, {} warnings, {} errors) in {:?}",
        metrics.reports_written,
        metrics.keys_visited,
        metrics.warnings,
        metrics.errors,
        metrics.total_duration
    );

    Ok(metrics)
}
