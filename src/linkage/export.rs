//! CSV export of denormalised tables.

use super::tables::{Table, Tables};
use crate::error::PipelineError;
use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Write `table` as CSV with a header row.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<(), PipelineError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write every table to `<output_dir>/<NAME>.csv`, creating the directory
/// if needed. Returns the written paths in table order.
pub fn write_tables(tables: &Tables, output_dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    std::fs::create_dir_all(output_dir)?;

    let mut paths = Vec::new();
    for table in tables.iter() {
        let path = output_dir.join(format!("{}.csv", table.name()));
        let file = File::create(&path)?;
        write_table(table, BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))?;
        debug!(table = table.name(), rows = table.len(), "wrote {}", path.display());
        paths.push(path);
    }

    info!(
        "Wrote {} tables to '{}'",
        paths.len(),
        output_dir.display()
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkage::tables::denormalise;
    use dgen_generator::{Record, Value};

    #[test]
    fn test_header_only_for_empty_table() {
        let tables = denormalise(&[]).unwrap();
        let mut out = Vec::new();
        write_table(&tables.hospdat, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "PATID,HOSPID,EVENT_DATE,EVENT_CODE\n");
    }

    #[test]
    fn test_quotes_cells_with_commas() {
        let mut record: Record = [
            ("PATID", "p1"),
            ("Gender", "male"),
            ("Name", "John"),
            ("Surname", "Jones"),
            ("DOB", "1960-01-01 00:00:00"),
            ("Address", "1 Mill Lane, Leeds"),
            ("Postcode", "AB12CD"),
            ("GPID", "A12345"),
        ]
        .into_iter()
        .collect();
        record.insert("DC", Value::Null);
        record.insert("PCD", Value::List(Vec::new()));
        record.insert("SCD", Value::List(Vec::new()));
        let tables = denormalise(&[record]).unwrap();

        let mut out = Vec::new();
        write_table(&tables.gp_dem, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text.lines().nth(1).unwrap(),
            "p1,John,Jones,1960-01-01 00:00:00,male,\"1 Mill Lane, Leeds\",AB12CD,A12345"
        );
    }

    #[test]
    fn test_write_tables_creates_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("nested");
        let tables = denormalise(&[]).unwrap();

        let paths = write_tables(&tables, &output).unwrap();

        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["GP_DEM.csv", "GP_CLIN.csv", "HOSPDAT.csv", "DEATHREG.csv"]);
        for path in paths {
            assert!(path.exists());
        }
    }
}
