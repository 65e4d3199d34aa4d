//! Output sink — ranked table as an Excel workbook or CSV, or the whole report
//! as JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::models::{RankedRecord, RankingReport, COLUMNS};

pub const SHEET_NAME: &str = "Sheet1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
    Json,
}

impl OutputFormat {
    /// `.xlsx` selects a workbook, `.json` the full report; every other
    /// extension (or none) selects CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => OutputFormat::Xlsx,
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Csv,
        }
    }
}

/// One-sheet workbook: header row, then one row per record. Scores, total
/// and rank are numeric cells; everything else is text.
pub fn build_workbook(rows: &[RankedRecord]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    for (i, row) in rows.iter().enumerate() {
        write_xlsx_row(sheet, i as u32 + 1, row)?;
    }
    Ok(workbook)
}

fn write_xlsx_row(
    sheet: &mut Worksheet,
    row_num: u32,
    row: &RankedRecord,
) -> Result<(), XlsxError> {
    // Column indices follow COLUMNS.
    let numbers: [(u16, f64); 4] = [
        (8, f64::from(row.record.gen_ai_score)),
        (9, f64::from(row.record.ai_ml_score)),
        (11, f64::from(row.total_score)),
        (12, f64::from(row.rank)),
    ];

    for (col, cell) in row.to_row().iter().enumerate() {
        let col = col as u16;
        match numbers.iter().find(|(c, _)| *c == col) {
            Some((_, n)) => sheet.write_number(row_num, col, *n)?,
            None => sheet.write_string(row_num, col, cell)?,
        };
    }
    Ok(())
}

/// Header row followed by one row per record, in the given order.
pub fn write_csv<W: Write>(writer: W, rows: &[RankedRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for row in rows {
        wtr.write_record(row.to_row())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn render_csv(rows: &[RankedRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows).context("Failed to render CSV")?;
    String::from_utf8(buf).context("Rendered CSV is not valid UTF-8")
}

/// Writes the report to `path` in the format its extension selects.
pub fn write_report(path: &Path, report: &RankingReport) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path);

    match format {
        OutputFormat::Xlsx => {
            let mut workbook =
                build_workbook(&report.candidates).context("Failed to build workbook")?;
            workbook
                .save(path)
                .with_context(|| format!("Failed to write workbook to '{}'", path.display()))?;
        }
        OutputFormat::Csv => {
            let mut writer = create_file(path)?;
            write_csv(&mut writer, &report.candidates)
                .with_context(|| format!("Failed to write CSV to '{}'", path.display()))?;
            flush_file(writer, path)?;
        }
        OutputFormat::Json => {
            let mut writer = create_file(path)?;
            serde_json::to_writer_pretty(&mut writer, report)
                .with_context(|| format!("Failed to write JSON to '{}'", path.display()))?;
            flush_file(writer, path)?;
        }
    }

    Ok(format)
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
    Ok(BufWriter::new(file))
}

fn flush_file(mut writer: BufWriter<File>, path: &Path) -> Result<()> {
    writer
        .flush()
        .with_context(|| format!("Failed to flush '{}'", path.display()))
}
