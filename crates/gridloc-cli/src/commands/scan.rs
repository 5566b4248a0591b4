use color_eyre::eyre::Result;
use gridloc_grid::{column_to_letter, extract_translatable_strings, find_language_rows};
use std::path::PathBuf;

pub fn run_scan(sheet: PathBuf, format: String, use_color: bool) -> Result<()> {
    let cfg = gridloc_config::load_config()?;
    let grid = gridloc_sheet_csv::read_grid_from_path(&sheet)?;
    tracing::debug!(event = "scan_args", sheet = %sheet.display(), rows = grid.row_count());

    let Some(source_row) = super::require_source_row(&grid, &cfg.source_marker()) else {
        println!(
            "no source row found (marker {:?}), nothing to do",
            cfg.source_marker()
        );
        return Ok(());
    };
    let strings = extract_translatable_strings(&grid, source_row);
    let languages = find_language_rows(&grid, source_row);

    if format == "json" {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &strings)?;
        println!();
        return Ok(());
    }

    println!(
        "source row {} in {:?}, {} string(s), {} language row(s)",
        source_row,
        grid.sheet(),
        strings.len(),
        languages.len()
    );
    for s in &strings {
        let limit = if s.max_length > 0 {
            format!(" (max {})", s.max_length)
        } else {
            String::new()
        };
        println!(
            "  {}  [{}] {:?}{}",
            s.identifier,
            column_to_letter(s.column),
            s.text,
            limit
        );
    }
    for l in &languages {
        let over = l
            .locale_override
            .as_deref()
            .map(|o| format!(" (override {o})"))
            .unwrap_or_default();
        match gridloc_locales::resolve_locale(&l.label, l.locale_override.as_deref()) {
            Some(code) => println!("  row {}: {} -> {}{}", l.row, l.label, code, over),
            None => crate::ui::warn(
                use_color,
                &format!("row {}: unknown language {:?}, will be skipped", l.row, l.label),
            ),
        }
    }
    Ok(())
}
