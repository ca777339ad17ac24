//! Row formatters.
//!
//! Rows may differ in width (open ranges follow each line's field count), so
//! neither format assumes a fixed column count. Headers name the columns of
//! the widest row `a`, `b`, ..., `z`, `aa`, `ab`, ...

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::value::Row;

/// Output format for rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Comma-separated values, one record per line
    #[default]
    Csv,
    /// A single object holding every row and the header
    Json,
}

/// Write every row in the chosen format and return how many were written.
///
/// Headerless CSV is streamed; the other outputs need the widest row before
/// the first byte is written, so they collect the rows first.
pub fn write<W: Write>(
    format: Format,
    header: bool,
    rows: impl Iterator<Item = Result<Row>>,
    out: W,
) -> Result<usize> {
    match format {
        Format::Csv if header => {
            let rows = rows.collect::<Result<Vec<_>>>()?;
            write_csv(Some(header_for(&rows)), rows.into_iter().map(Ok), out)
        }
        Format::Csv => write_csv(None, rows, out),
        Format::Json => write_json(rows.collect::<Result<Vec<_>>>()?, out),
    }
}

/// Column names for the widest of `rows`.
pub fn header_for(rows: &[Row]) -> Row {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width).map(column_name).collect()
}

/// Spreadsheet-style lowercase name of a 0-based column.
pub fn column_name(column: usize) -> String {
    let mut name = Vec::new();
    let mut n = column + 1;
    while n > 0 {
        n -= 1;
        name.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

fn write_csv<W: Write>(
    header: Option<Row>,
    rows: impl Iterator<Item = Result<Row>>,
    out: W,
) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    if let Some(header) = header.filter(|h| !h.is_empty()) {
        writer
            .write_record(&header)
            .context("failed to write CSV header")?;
    }

    let mut count = 0;
    for row in rows {
        writer
            .write_record(&row?)
            .context("failed to write CSV record")?;
        count += 1;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(count)
}

#[derive(Serialize)]
struct Table {
    rows: Vec<Row>,
    header: Row,
}

fn write_json<W: Write>(rows: Vec<Row>, mut out: W) -> Result<usize> {
    let table = Table {
        header: header_for(&rows),
        rows,
    };
    serde_json::to_writer_pretty(&mut out, &table).context("failed to write JSON")?;
    writeln!(out).context("failed to write JSON")?;
    out.flush().context("failed to flush JSON output")?;
    Ok(table.rows.len())
}
