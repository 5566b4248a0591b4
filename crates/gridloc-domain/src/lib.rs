use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// One source cell prepared for upload, built fresh per run from the grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TranslatableString {
    pub identifier: String,
    pub text: String,
    /// Human-readable "sheet + cell" label shown to translators.
    pub context: String,
    /// 0 means no limit configured for this column.
    pub max_length: u32,
    /// 1-based grid column the text came from.
    pub column: usize,
}

/// A string record as the TMS knows it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemoteString {
    pub id: u64,
    pub identifier: String,
    pub text: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, rename = "maxLength")]
    pub max_length: u32,
    #[serde(default, rename = "branchId")]
    pub branch_id: u64,
}

/// One translation of a remote string for a given locale.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TmsTranslation {
    #[serde(rename = "stringId")]
    pub string_id: u64,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Branch {
    pub id: u64,
    pub name: String,
}

/// One language row of the grid: label in column A, optional locale
/// override in column B.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LanguageRow {
    pub row: usize,
    pub label: String,
    pub locale_override: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PushItemStat {
    pub identifier: String,
    /// created/updated/failed
    pub status: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PushSummary {
    pub processed: usize,
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
    pub items: Vec<PushItemStat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PullSummary {
    pub processed: usize,
    pub written: usize,
    /// Identifier had no remote string, or the string had no translation
    /// for the requested locale. The cell is left untouched either way.
    pub missed: usize,
    pub skipped_rows: usize,
    pub failed: usize,
    /// Bounded: only the first few failure messages are kept.
    pub failures: Vec<String>,
}

/// Progress marker persisted after each fully processed unit so an
/// interrupted run can resume instead of restarting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Checkpoint {
    pub schema_version: u32,
    pub sheet: String,
    /// Last fully processed language row (pull) or 0 (push).
    pub row: usize,
    /// Last fully processed column.
    pub column: usize,
}

impl Checkpoint {
    pub fn new(sheet: &str, row: usize, column: usize) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            sheet: sheet.to_string(),
            row,
            column,
        }
    }
}
