//! Language-label to TMS locale mapping and the pull-locale quirks.

/// Locale code for a human language label as it appears in column A.
/// Lookup is by exact trimmed label.
pub fn locale_for_label(label: &str) -> Option<&'static str> {
    match label.trim() {
        "English (US)" => Some("en"),
        "English (UK)" => Some("en-GB"),
        "French" => Some("fr-FR"),
        "German" => Some("de-DE"),
        "Italian" => Some("it-IT"),
        "Japanese" => Some("ja-JP"),
        "Korean" => Some("ko-KR"),
        "Portuguese (Brazil)" => Some("pt-BR"),
        "Russian" => Some("ru-RU"),
        "Spanish" => Some("es-ES"),
        "LATAM Spanish" => Some("es-419"),
        "Simplified Chinese" => Some("zh-CN"),
        "Traditional Chinese" => Some("zh-TW"),
        _ => None,
    }
}

/// Resolve a language row to a locale code: mapped label first, then the
/// explicit column-B override. `None` means the row cannot be pulled.
pub fn resolve_locale(label: &str, locale_override: Option<&str>) -> Option<String> {
    if let Some(code) = locale_for_label(label) {
        return Some(code.to_string());
    }
    match locale_override.map(str::trim) {
        Some(o) if !o.is_empty() => Some(o.to_string()),
        _ => None,
    }
}

/// Codes the TMS keys translations by verbatim; everything else is queried
/// by its bare language part.
const VERBATIM_PULL_LOCALES: [&str; 3] = ["es-419", "zh-CN", "zh-TW"];

/// Map a locale code to the TMS language-query parameter. The three
/// verbatim codes pass through; any other code loses its last three
/// characters (the "-XX" region suffix): "fr-FR" -> "fr". This asymmetry
/// mirrors the TMS's own language ids and must not be "fixed".
pub fn normalize_pull_locale(code: &str) -> String {
    if VERBATIM_PULL_LOCALES.contains(&code) {
        return code.to_string();
    }
    // Count and cut by characters: the override column is arbitrary user
    // text, so byte slicing could land inside a multibyte character.
    let chars = code.chars().count();
    if chars > 3 {
        code.chars().take(chars - 3).collect()
    } else {
        code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(locale_for_label("French"), Some("fr-FR"));
        assert_eq!(locale_for_label("  French  "), Some("fr-FR"));
        assert_eq!(locale_for_label("LATAM Spanish"), Some("es-419"));
        assert_eq!(locale_for_label("Klingon"), None);
    }

    #[test]
    fn override_fills_in_for_unknown_labels() {
        assert_eq!(resolve_locale("French", None).as_deref(), Some("fr-FR"));
        assert_eq!(
            resolve_locale("Klingon", Some("tlh-KL")).as_deref(),
            Some("tlh-KL")
        );
        assert_eq!(resolve_locale("Klingon", Some("  ")), None);
        assert_eq!(resolve_locale("Klingon", None), None);
    }

    #[test]
    fn pull_locale_normalization_matches_tms_conventions() {
        assert_eq!(normalize_pull_locale("fr-FR"), "fr");
        assert_eq!(normalize_pull_locale("de-DE"), "de");
        assert_eq!(normalize_pull_locale("pt-BR"), "pt");
        assert_eq!(normalize_pull_locale("es-419"), "es-419");
        assert_eq!(normalize_pull_locale("zh-CN"), "zh-CN");
        assert_eq!(normalize_pull_locale("zh-TW"), "zh-TW");
        // Short codes have no region suffix to strip.
        assert_eq!(normalize_pull_locale("en"), "en");
    }

    #[test]
    fn multibyte_override_codes_are_handled_per_character() {
        // Overrides come from a free-text grid column; stripping must not
        // split a multibyte character.
        assert_eq!(normalize_pull_locale("éé"), "éé");
        assert_eq!(normalize_pull_locale("日本語"), "日本語");
        assert_eq!(normalize_pull_locale("srpski-ćir"), "srpski-");
    }
}
