use crate::{Grid, FIRST_CONTENT_COL, LABEL_COL, LAST_CONTENT_COL, OVERRIDE_COL};
use gridloc_domain::{LanguageRow, TranslatableString};
use regex::Regex;

/// First row whose column-A cell contains `source_marker` (substring,
/// case-sensitive). A grid without one yields no work.
pub fn find_source_row(grid: &Grid, source_marker: &str) -> Option<usize> {
    (1..=grid.row_count()).find(|&row| grid.cell(row, LABEL_COL).contains(source_marker))
}

/// Rows strictly below the source row, contiguous until the first row with
/// an empty column-A cell.
pub fn find_language_rows(grid: &Grid, source_row: usize) -> Vec<LanguageRow> {
    let mut rows = Vec::new();
    for row in (source_row + 1)..=grid.row_count() {
        let label = grid.cell(row, LABEL_COL).trim();
        if label.is_empty() {
            break;
        }
        let over = grid.cell(row, OVERRIDE_COL).trim();
        rows.push(LanguageRow {
            row,
            label: label.to_string(),
            locale_override: if over.is_empty() {
                None
            } else {
                Some(over.to_string())
            },
        });
    }
    rows
}

/// Scan a column top-to-bottom for the first "<N> char max" annotation
/// (case-insensitive); 0 when none. The source row itself is not an
/// annotation cell and is skipped.
pub fn max_length_for_column(grid: &Grid, col: usize, source_row: usize) -> u32 {
    let re = Regex::new(r"(?i)(\d+)\s*char max").unwrap();
    for row in 1..=grid.row_count() {
        if row == source_row {
            continue;
        }
        if let Some(caps) = re.captures(grid.cell(row, col)) {
            if let Ok(n) = caps[1].parse::<u32>() {
                return n;
            }
        }
    }
    0
}

/// Build the upload set from the source row, left to right over D..=Z.
/// Cells empty after trimming are skipped.
pub fn extract_translatable_strings(grid: &Grid, source_row: usize) -> Vec<TranslatableString> {
    let mut out = Vec::new();
    for col in FIRST_CONTENT_COL..=LAST_CONTENT_COL {
        let text = grid.cell(source_row, col).trim();
        if text.is_empty() {
            continue;
        }
        let letter = crate::column_to_letter(col);
        out.push(TranslatableString {
            identifier: crate::make_identifier(grid.sheet(), source_row, col),
            text: text.to_string(),
            context: format!("{} {}{}", grid.sheet(), letter, source_row),
            max_length: max_length_for_column(grid, col, source_row),
            column: col,
        });
    }
    out
}
