//! Grid model, the identifier scheme and the extraction scans.
//!
//! All addressing is 1-based. Columns A-C are row metadata (A = language
//! label, B = explicit locale override, C = unused); translatable content
//! lives in D..=Z.

use serde::{Deserialize, Serialize};

mod extract;
mod ident;

pub use extract::{
    extract_translatable_strings, find_language_rows, find_source_row, max_length_for_column,
};
pub use ident::{column_from_letter, column_to_letter, make_identifier};

/// First grid column that may hold translatable text (D).
pub const FIRST_CONTENT_COL: usize = 4;
/// Last grid column scanned for translatable text (Z).
pub const LAST_CONTENT_COL: usize = 26;

pub const LABEL_COL: usize = 1;
pub const OVERRIDE_COL: usize = 2;

/// One sheet held in memory as ordered rows of ordered cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grid {
    sheet: String,
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            rows: Vec::new(),
        }
    }

    pub fn from_rows(sheet: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            sheet: sheet.into(),
            rows,
        }
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cell text at a 1-based (row, col), empty string when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        if row == 0 || col == 0 {
            return "";
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Write a cell, growing the grid as needed. 1-based addressing.
    pub fn set_cell(&mut self, row: usize, col: usize, text: impl Into<String>) {
        assert!(row >= 1 && col >= 1, "grid addressing is 1-based");
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let r = &mut self.rows[row - 1];
        if r.len() < col {
            r.resize(col, String::new());
        }
        r[col - 1] = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_empty_out_of_range() {
        let g = Grid::from_rows("S", vec![vec!["a".into()]]);
        assert_eq!(g.cell(1, 1), "a");
        assert_eq!(g.cell(1, 2), "");
        assert_eq!(g.cell(9, 1), "");
        assert_eq!(g.cell(0, 0), "");
    }

    #[test]
    fn set_cell_grows_grid() {
        let mut g = Grid::new("S");
        g.set_cell(3, 4, "hello");
        assert_eq!(g.cell(3, 4), "hello");
        assert_eq!(g.cell(3, 3), "");
        assert_eq!(g.row_count(), 3);
    }
}
