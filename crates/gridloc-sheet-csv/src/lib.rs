//! CSV backing for one grid sheet. Rows map 1:1 to grid rows; ragged
//! records are allowed so metadata-only rows stay short.

use color_eyre::eyre::Result;
use gridloc_grid::Grid;
use std::io::{Read, Write};
use std::path::Path;

pub fn read_grid<R: Read>(reader: R, sheet: &str) -> Result<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Grid::from_rows(sheet, rows))
}

pub fn write_grid<W: Write>(writer: W, grid: &Grid) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    for row in grid.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Sheet name from a file path: the stem, or "Sheet1" for odd paths.
pub fn sheet_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string())
}

pub fn read_grid_from_path(path: &Path) -> Result<Grid> {
    let file = std::fs::File::open(path)?;
    read_grid(file, &sheet_name_from_path(path))
}

pub fn write_grid_to_path(path: &Path, grid: &Grid) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_grid(file, grid)
}
