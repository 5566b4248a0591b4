use crate::{Pacer, Result};
use gridloc_domain::{Checkpoint, LanguageRow, PullSummary};
use gridloc_grid::{make_identifier, Grid};
use gridloc_locales::{normalize_pull_locale, resolve_locale};
use gridloc_tms::TmsApi;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PullOptions {
    pub branch_id: u64,
    /// Cap on failure messages kept in the summary.
    pub max_reported_failures: usize,
    pub checkpoint: Option<PathBuf>,
}

impl Default for PullOptions {
    fn default() -> Self {
        Self {
            branch_id: 0,
            max_reported_failures: 5,
            checkpoint: None,
        }
    }
}

/// Pull translations row-major: for every language row and every source
/// column, resolve the string by identifier, fetch its translation for the
/// normalized locale, and write back on success. Cells without a remote
/// string or translation stay untouched.
pub fn pull_translations(
    api: &dyn TmsApi,
    grid: &mut Grid,
    source_row: usize,
    language_rows: &[LanguageRow],
    columns: &[usize],
    opts: &PullOptions,
    pacer: &mut dyn Pacer,
) -> Result<PullSummary> {
    let sheet = grid.sheet().to_string();
    let resume_after = match opts.checkpoint.as_deref() {
        Some(path) => crate::load_checkpoint(path)?
            .filter(|cp| cp.sheet == sheet)
            .map(|cp| (cp.row, cp.column)),
        None => None,
    };
    if let Some((row, col)) = resume_after {
        tracing::info!(event = "pull_resume", sheet = %sheet, after_row = row, after_column = col);
    }
    let done = |row: usize, col: usize| match resume_after {
        Some((r, c)) => row < r || (row == r && col <= c),
        None => false,
    };

    let mut summary = PullSummary::default();
    for lang in language_rows {
        let Some(locale) = resolve_locale(&lang.label, lang.locale_override.as_deref()) else {
            summary.skipped_rows += 1;
            tracing::warn!(event = "pull_unknown_locale", row = lang.row, label = %lang.label);
            continue;
        };
        let language_id = normalize_pull_locale(&locale);

        for &col in columns {
            if done(lang.row, col) {
                continue;
            }
            summary.processed += 1;
            let identifier = make_identifier(&sheet, source_row, col);

            // Two round trips per cell: resolve the string, then its
            // translation. There is no local cache of remote state.
            match fetch_translation(api, &identifier, opts.branch_id, &language_id) {
                Ok(Some(text)) => {
                    grid.set_cell(lang.row, col, text);
                    summary.written += 1;
                }
                Ok(None) => {
                    summary.missed += 1;
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(event = "pull_item_failed", identifier = %identifier, error = %e);
                    if summary.failures.len() < opts.max_reported_failures {
                        summary.failures.push(format!("{identifier}: {e}"));
                    }
                }
            }

            if let Some(path) = opts.checkpoint.as_deref() {
                crate::save_checkpoint(path, &Checkpoint::new(&sheet, lang.row, col))?;
            }
            pacer.after_item();
        }
        pacer.after_group();
    }

    if let Some(path) = opts.checkpoint.as_deref() {
        crate::clear_checkpoint(path)?;
    }
    Ok(summary)
}

fn fetch_translation(
    api: &dyn TmsApi,
    identifier: &str,
    branch_id: u64,
    language_id: &str,
) -> std::result::Result<Option<String>, gridloc_tms::TmsError> {
    let Some(remote) = api.find_string(identifier, branch_id)? else {
        tracing::debug!(event = "pull_no_string", identifier = identifier);
        return Ok(None);
    };
    let translations = api.list_translations(remote.id, language_id)?;
    match translations.into_iter().next() {
        Some(t) => Ok(Some(t.text)),
        None => {
            tracing::debug!(event = "pull_no_translation", identifier = identifier, language = language_id);
            Ok(None)
        }
    }
}
