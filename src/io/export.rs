//! CSV export for forecast tables and convergence traces.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::report::ForecastReport;

/// Column header for the forecast table.
const FORECAST_HEADER: &str = "step,index,forecast,actual,abs_error";

/// Column header for the convergence trace.
const TRACE_HEADER: &str = "iteration,global_best_fitness";

/// Exports the forecast table to a CSV file at the given path.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_forecast_csv(report: &ForecastReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_forecast_csv(report, io::BufWriter::new(file))
}

/// Writes the forecast table as CSV to any writer.
///
/// One row per forecast step; `actual` and `abs_error` are empty when the
/// series ends before that step.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_forecast_csv(report: &ForecastReport, writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(FORECAST_HEADER.split(','))?;

    for r in &report.rows {
        wtr.write_record(&[
            r.step.to_string(),
            r.index.to_string(),
            format!("{:.6}", r.forecast),
            r.actual.map(|a| format!("{a:.6}")).unwrap_or_default(),
            r.abs_error().map(|e| format!("{e:.6}")).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the per-pass global best fitness to a CSV file.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_trace_csv(history: &[f64], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_trace_csv(history, io::BufWriter::new(file))
}

/// Writes the per-pass global best fitness as CSV to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_trace_csv(history: &[f64], writer: impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(TRACE_HEADER.split(','))?;
    for (i, fitness) in history.iter().enumerate() {
        wtr.write_record(&[i.to_string(), format!("{fitness:.9e}")])?;
    }
    wtr.flush()?;
    Ok(())
}
