use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridLocConfig {
    pub api_token: Option<String>,
    pub project_id: Option<u64>,
    pub base_url: Option<String>,
    /// Substring that marks the source-language row in column A.
    pub source_marker: Option<String>,
    pub list_limit: Option<usize>,
    pub item_delay_ms: Option<u64>,
    pub group_delay_ms: Option<u64>,
    pub group_size: Option<usize>,
    pub push: Option<PushCfg>,
    pub pull: Option<PullCfg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushCfg {
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullCfg {
    pub max_reported_failures: Option<usize>,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("API token is missing: set GRIDLOC_API_TOKEN or api_token in gridloc.toml")]
    MissingToken,
    #[error("project id is missing: set GRIDLOC_PROJECT_ID or project_id in gridloc.toml")]
    MissingProjectId,
    #[error("project id must be numeric, got {0:?}")]
    InvalidProjectId(String),
    #[error("{0}")]
    Other(String),
}

/// Credentials and endpoint a run needs before touching the network.
/// Loaded once and treated as immutable for the run's duration.
#[derive(Debug, Clone)]
pub struct SyncCredentials {
    pub api_token: String,
    pub project_id: u64,
    pub base_url: String,
}

pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/v2";
pub const DEFAULT_SOURCE_MARKER: &str = "English";
pub const DEFAULT_LIST_LIMIT: usize = 500;
pub const DEFAULT_ITEM_DELAY_MS: u64 = 300;
pub const DEFAULT_GROUP_DELAY_MS: u64 = 1000;
pub const DEFAULT_GROUP_SIZE: usize = 10;

pub fn load_config() -> Result<GridLocConfig, ConfigError> {
    // Search order: CWD/gridloc.toml, $HOME/.config/gridloc/gridloc.toml,
    // then GRIDLOC_* environment overrides on top.
    let mut merged = GridLocConfig::default();
    if let Ok(p) = std::env::current_dir() {
        let path = p.join("gridloc.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<GridLocConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    if let Some(base) = dirs::config_dir() {
        let path = base.join("gridloc").join("gridloc.toml");
        if let Ok(s) = std::fs::read_to_string(&path) {
            if let Ok(cfg) = toml::from_str::<GridLocConfig>(&s) {
                merged = merge(merged, cfg);
            }
        }
    }
    apply_env(&mut merged)?;
    Ok(merged)
}

fn apply_env(cfg: &mut GridLocConfig) -> Result<(), ConfigError> {
    if let Ok(token) = std::env::var("GRIDLOC_API_TOKEN") {
        if !token.trim().is_empty() {
            cfg.api_token = Some(token);
        }
    }
    if let Ok(id) = std::env::var("GRIDLOC_PROJECT_ID") {
        let id = id.trim().to_string();
        if !id.is_empty() {
            let parsed = id
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidProjectId(id))?;
            cfg.project_id = Some(parsed);
        }
    }
    if let Ok(url) = std::env::var("GRIDLOC_BASE_URL") {
        if !url.trim().is_empty() {
            cfg.base_url = Some(url);
        }
    }
    Ok(())
}

impl GridLocConfig {
    /// Validate the token/project pair before any sync operation runs.
    pub fn credentials(&self) -> Result<SyncCredentials, ConfigError> {
        let api_token = match self.api_token.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => return Err(ConfigError::MissingToken),
        };
        let project_id = self.project_id.ok_or(ConfigError::MissingProjectId)?;
        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(SyncCredentials {
            api_token,
            project_id,
            base_url,
        })
    }

    pub fn source_marker(&self) -> String {
        self.source_marker
            .clone()
            .unwrap_or_else(|| DEFAULT_SOURCE_MARKER.to_string())
    }

    pub fn list_limit(&self) -> usize {
        self.list_limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

fn merge(mut a: GridLocConfig, b: GridLocConfig) -> GridLocConfig {
    if a.api_token.is_none() {
        a.api_token = b.api_token;
    }
    if a.project_id.is_none() {
        a.project_id = b.project_id;
    }
    if a.base_url.is_none() {
        a.base_url = b.base_url;
    }
    if a.source_marker.is_none() {
        a.source_marker = b.source_marker;
    }
    if a.list_limit.is_none() {
        a.list_limit = b.list_limit;
    }
    if a.item_delay_ms.is_none() {
        a.item_delay_ms = b.item_delay_ms;
    }
    if a.group_delay_ms.is_none() {
        a.group_delay_ms = b.group_delay_ms;
    }
    if a.group_size.is_none() {
        a.group_size = b.group_size;
    }
    a.push = merge_opt(a.push, b.push, merge_push);
    a.pull = merge_opt(a.pull, b.pull, merge_pull);
    a
}

fn merge_opt<T: Default>(a: Option<T>, b: Option<T>, f: fn(T, T) -> T) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(f(a, b)),
        (None, Some(b)) => Some(b),
        (Some(a), None) => Some(a),
        (None, None) => None,
    }
}

fn merge_push(mut a: PushCfg, b: PushCfg) -> PushCfg {
    if a.dry_run.is_none() {
        a.dry_run = b.dry_run;
    }
    a
}

fn merge_pull(mut a: PullCfg, b: PullCfg) -> PullCfg {
    if a.max_reported_failures.is_none() {
        a.max_reported_failures = b.max_reported_failures;
    }
    a
}
