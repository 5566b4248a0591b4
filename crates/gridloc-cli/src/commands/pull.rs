use color_eyre::eyre::Result;
use gridloc_config::{
    DEFAULT_GROUP_DELAY_MS, DEFAULT_GROUP_SIZE, DEFAULT_ITEM_DELAY_MS,
};
use gridloc_grid::{extract_translatable_strings, find_language_rows};
use gridloc_services::{
    pull_translations, resolve_active_branch, FixedDelayPacer, PullOptions,
};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn run_pull(
    sheet: PathBuf,
    out: Option<PathBuf>,
    columns: Vec<String>,
    checkpoint: Option<PathBuf>,
    format: String,
    use_color: bool,
) -> Result<()> {
    let (client, cfg) = super::client_from_config()?;
    let mut grid = gridloc_sheet_csv::read_grid_from_path(&sheet)?;

    let Some(source_row) = super::require_source_row(&grid, &cfg.source_marker()) else {
        println!(
            "no source row found (marker {:?}), nothing to pull",
            cfg.source_marker()
        );
        return Ok(());
    };
    let strings = extract_translatable_strings(&grid, source_row);
    let mut cols: Vec<usize> = strings.iter().map(|s| s.column).collect();
    if !columns.is_empty() {
        let selected = super::parse_column_selection(&columns)?;
        cols.retain(|c| selected.contains(c));
    }
    let language_rows = find_language_rows(&grid, source_row);
    if cols.is_empty() || language_rows.is_empty() {
        println!("no language rows or translatable columns, nothing to pull");
        return Ok(());
    }

    let branch_id = resolve_active_branch(&client)?;
    tracing::info!(
        event = "pull_start",
        sheet = %grid.sheet(),
        rows = language_rows.len(),
        columns = cols.len(),
        branch_id = branch_id
    );

    let mut pacer = FixedDelayPacer::new(
        cfg.item_delay_ms.unwrap_or(DEFAULT_ITEM_DELAY_MS),
        cfg.group_delay_ms.unwrap_or(DEFAULT_GROUP_DELAY_MS),
        cfg.group_size.unwrap_or(DEFAULT_GROUP_SIZE),
    );
    let opts = PullOptions {
        branch_id,
        max_reported_failures: cfg
            .pull
            .as_ref()
            .and_then(|p| p.max_reported_failures)
            .unwrap_or_else(|| PullOptions::default().max_reported_failures),
        checkpoint,
    };
    let summary = pull_translations(
        &client,
        &mut grid,
        source_row,
        &language_rows,
        &cols,
        &opts,
        &mut pacer,
    )?;

    let target = out.as_deref().unwrap_or(&sheet);
    gridloc_sheet_csv::write_grid_to_path(target, &grid)?;

    if format == "json" {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &summary)?;
        println!();
        return Ok(());
    }

    let line = format!(
        "pulled {} cell(s): {} written, {} missing, {} failed, {} row(s) skipped -> {}",
        summary.processed,
        summary.written,
        summary.missed,
        summary.failed,
        summary.skipped_rows,
        target.display()
    );
    if summary.failed == 0 {
        crate::ui::ok(use_color, &line);
    } else {
        crate::ui::warn(use_color, &line);
        for msg in &summary.failures {
            crate::ui::fail(use_color, msg);
        }
    }
    Ok(())
}
