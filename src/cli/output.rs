//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use reframe::RewriteError;
use reframe::rewrite::{RewriteResult, ServiceStatus};

/// Writes a result record to the given writer.
pub fn write_record<W: Write>(writer: &mut W, record: &RewriteResult) -> Result<(), RewriteError> {
    writeln!(writer, "Original problem: {}", record.original_problem)
        .map_err(|e| io_error(&e))?;
    writeln!(writer, "Theme: {}", record.theme).map_err(|e| io_error(&e))?;
    writeln!(writer, "Rewritten problem:\n  {}", record.rewritten_problem)
        .map_err(|e| io_error(&e))?;

    if !record.examples_used.is_empty() {
        writeln!(writer, "Examples used:").map_err(|e| io_error(&e))?;
        for (index, example) in record.examples_used.iter().enumerate() {
            writeln!(writer, "  {}. {example}", index.saturating_add(1))
                .map_err(|e| io_error(&e))?;
        }
    }

    if !record.notes.is_empty() {
        writeln!(writer, "Notes: {}", record.notes.join("  ")).map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Writes the service health and retrieval index status.
pub fn write_service_status<W: Write>(
    writer: &mut W,
    api_url: &str,
    status: Option<&ServiceStatus>,
) -> Result<(), RewriteError> {
    writeln!(writer, "Rewrite service at {api_url}: healthy").map_err(|e| io_error(&e))?;

    let Some(index) = status else {
        writeln!(writer, "Retrieval index: unavailable").map_err(|e| io_error(&e))?;
        return Ok(());
    };

    let dataset = if index.dataset_loaded {
        "loaded"
    } else {
        "not loaded"
    };
    let built = if index.index_built { "yes" } else { "no" };
    writeln!(
        writer,
        "Retrieval index: dataset {dataset} ({} examples), index built: {built}",
        index.num_examples
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "Dataset: {}", index.excel_path).map_err(|e| io_error(&e))?;

    Ok(())
}

/// Converts an I/O error to a [`RewriteError::Io`].
pub(crate) fn io_error(error: &io::Error) -> RewriteError {
    RewriteError::io(error)
}
