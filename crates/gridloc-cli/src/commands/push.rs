use color_eyre::eyre::Result;
use gridloc_config::{
    DEFAULT_GROUP_DELAY_MS, DEFAULT_GROUP_SIZE, DEFAULT_ITEM_DELAY_MS,
};
use gridloc_grid::extract_translatable_strings;
use gridloc_services::{
    push_strings, resolve_active_branch, FixedDelayPacer, NoopPacer, Pacer, PushOptions,
    RemoteStringIndex,
};
use std::path::PathBuf;

pub fn run_push(
    sheet: PathBuf,
    columns: Vec<String>,
    dry_run: bool,
    checkpoint: Option<PathBuf>,
    format: String,
    use_color: bool,
) -> Result<()> {
    let (client, cfg) = super::client_from_config()?;
    let grid = gridloc_sheet_csv::read_grid_from_path(&sheet)?;

    let Some(source_row) = super::require_source_row(&grid, &cfg.source_marker()) else {
        println!(
            "no source row found (marker {:?}), nothing to push",
            cfg.source_marker()
        );
        return Ok(());
    };
    let mut strings = extract_translatable_strings(&grid, source_row);
    if !columns.is_empty() {
        let selected = super::parse_column_selection(&columns)?;
        strings.retain(|s| selected.contains(&s.column));
    }
    if strings.is_empty() {
        println!("no translatable cells in the selected range, nothing to push");
        return Ok(());
    }

    let dry_run = dry_run || cfg.push.as_ref().and_then(|p| p.dry_run).unwrap_or(false);

    let branch_id = resolve_active_branch(&client)?;
    let index = RemoteStringIndex::load(&client, branch_id, cfg.list_limit())?;
    tracing::info!(
        event = "push_start",
        sheet = %grid.sheet(),
        strings = strings.len(),
        branch_id = branch_id,
        known_remote = index.len(),
        dry_run = dry_run
    );
    let mut pacer: Box<dyn Pacer> = if dry_run {
        Box::new(NoopPacer)
    } else {
        Box::new(FixedDelayPacer::new(
            cfg.item_delay_ms.unwrap_or(DEFAULT_ITEM_DELAY_MS),
            cfg.group_delay_ms.unwrap_or(DEFAULT_GROUP_DELAY_MS),
            cfg.group_size.unwrap_or(DEFAULT_GROUP_SIZE),
        ))
    };

    let opts = PushOptions {
        branch_id,
        dry_run,
        checkpoint,
    };
    let summary = push_strings(
        &client,
        &index,
        grid.sheet(),
        &strings,
        &opts,
        pacer.as_mut(),
    )?;

    if format == "json" {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &summary)?;
        println!();
        return Ok(());
    }

    let verb = if dry_run { "would push" } else { "pushed" };
    let line = format!(
        "{} {} string(s): {} created, {} updated, {} failed",
        verb, summary.processed, summary.created, summary.updated, summary.failed
    );
    if summary.failed == 0 {
        crate::ui::ok(use_color, &line);
    } else {
        crate::ui::warn(use_color, &line);
        for item in summary.items.iter().filter(|i| i.status == "failed") {
            crate::ui::fail(
                use_color,
                &format!(
                    "{}: {}",
                    item.identifier,
                    item.error.as_deref().unwrap_or("unknown error")
                ),
            );
        }
    }
    Ok(())
}
