pub mod connect;
pub mod pull;
pub mod push;
pub mod scan;

use color_eyre::eyre::{eyre, Result};
use gridloc_grid::{column_from_letter, Grid, FIRST_CONTENT_COL, LAST_CONTENT_COL};
use gridloc_tms::TmsClient;

/// Build the API client from validated config; fails fast before any
/// network call when credentials are missing.
pub fn client_from_config() -> Result<(TmsClient, gridloc_config::GridLocConfig)> {
    let cfg = gridloc_config::load_config()?;
    let creds = cfg.credentials()?;
    let client = TmsClient::new(&creds.base_url, &creds.api_token, creds.project_id)?;
    Ok((client, cfg))
}

/// Locate the source row or explain that the sheet holds no work.
pub fn require_source_row(grid: &Grid, marker: &str) -> Option<usize> {
    gridloc_grid::find_source_row(grid, marker)
}

/// Parse repeated `--column D` selections into 1-based indices.
pub fn parse_column_selection(letters: &[String]) -> Result<Vec<usize>> {
    let mut cols = Vec::new();
    for raw in letters {
        let letter = raw.trim().to_ascii_uppercase();
        let col = column_from_letter(&letter)
            .ok_or_else(|| eyre!("invalid column letter {raw:?}"))?;
        if !(FIRST_CONTENT_COL..=LAST_CONTENT_COL).contains(&col) {
            return Err(eyre!(
                "column {letter} is outside the translatable range D..Z"
            ));
        }
        cols.push(col);
    }
    cols.sort_unstable();
    cols.dedup();
    Ok(cols)
}
