// src/io/reporting.rs

use crate::error::Result;
use crate::simulation::table::DailyRecord;
use std::io::Write;
use std::path::Path;

/// Writes the result table as CSV to any writer.
///
/// The header row matches the JSON field names: `day,demand,forecast,ROP,inventory,order`.
pub fn write_result_table<W: Write>(writer: W, rows: &[DailyRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for record in rows {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}

/// Writes the result table to a CSV file at `file_path`.
pub fn write_result_table_to_path(file_path: &Path, rows: &[DailyRecord]) -> Result<()> {
    let file = std::fs::File::create(file_path)?;
    write_result_table(file, rows)?;

    tracing::info!(rows = rows.len(), path = %file_path.display(), "exported result table");
    Ok(())
}
