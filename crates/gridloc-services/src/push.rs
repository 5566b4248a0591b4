use crate::{index::RemoteStringIndex, Pacer, Result};
use gridloc_domain::{Checkpoint, PushItemStat, PushSummary, TranslatableString};
use gridloc_tms::{NewString, TmsApi, UpdateString};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    pub branch_id: u64,
    /// Plan only: decide create/update against the index, issue no writes.
    pub dry_run: bool,
    /// When set, progress is persisted here after each item and completed
    /// columns are skipped on re-invocation.
    pub checkpoint: Option<PathBuf>,
}

/// Push extracted source cells in column order. Per-item transport errors
/// are counted and logged, never abort the batch; only configuration
/// problems surfaced before this point may fail a push as a whole.
pub fn push_strings(
    api: &dyn TmsApi,
    index: &RemoteStringIndex,
    sheet: &str,
    strings: &[TranslatableString],
    opts: &PushOptions,
    pacer: &mut dyn Pacer,
) -> Result<PushSummary> {
    let resume_after = match opts.checkpoint.as_deref() {
        Some(path) => crate::load_checkpoint(path)?
            .filter(|cp| cp.sheet == sheet)
            .map(|cp| cp.column),
        None => None,
    };
    if let Some(col) = resume_after {
        tracing::info!(event = "push_resume", sheet = sheet, after_column = col);
    }

    let mut summary = PushSummary::default();
    for item in strings {
        if let Some(col) = resume_after {
            if item.column <= col {
                continue;
            }
        }
        summary.processed += 1;

        let existing = index.get(&item.identifier);
        let outcome = if opts.dry_run {
            Ok(if existing.is_some() { "updated" } else { "created" })
        } else if let Some(remote) = existing {
            api.update_string(
                remote.id,
                &UpdateString {
                    text: item.text.clone(),
                    context: item.context.clone(),
                    max_length: item.max_length,
                },
            )
            .map(|_| "updated")
        } else {
            api.create_string(&NewString {
                text: item.text.clone(),
                identifier: item.identifier.clone(),
                context: item.context.clone(),
                branch_id: opts.branch_id,
                max_length: item.max_length,
            })
            .map(|_| "created")
        };

        match outcome {
            Ok(status) => {
                if status == "created" {
                    summary.created += 1;
                } else {
                    summary.updated += 1;
                }
                tracing::debug!(event = "push_item", identifier = %item.identifier, status = status);
                summary.items.push(PushItemStat {
                    identifier: item.identifier.clone(),
                    status: status.to_string(),
                    error: None,
                });
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!(event = "push_item_failed", identifier = %item.identifier, error = %e);
                summary.items.push(PushItemStat {
                    identifier: item.identifier.clone(),
                    status: "failed".to_string(),
                    error: Some(e.to_string()),
                });
            }
        }

        if !opts.dry_run {
            if let Some(path) = opts.checkpoint.as_deref() {
                crate::save_checkpoint(path, &Checkpoint::new(sheet, 0, item.column))?;
            }
        }
        pacer.after_item();
    }

    if !opts.dry_run {
        if let Some(path) = opts.checkpoint.as_deref() {
            crate::clear_checkpoint(path)?;
        }
    }
    Ok(summary)
}
