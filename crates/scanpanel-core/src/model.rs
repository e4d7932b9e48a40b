use serde::{Deserialize, Deserializer, Serialize};

/// Documented fallbacks for every numeric or textual field the remote
/// store may omit. Missing or unparseable input coerces to these, it
/// never fails a load.
pub mod defaults {
    pub const TIMEOUT_SECONDS: u32 = 15;
    pub const FETCH_LIMIT: u32 = 50;
    pub const REVERIFY_TIME: &str = "02:30";
    pub const REVERIFY_COUNT: u32 = 50;
    pub const SYNC_TIME: &str = "03:00";
    pub const SYNC_LIMIT: u32 = 100;
    pub const SYNC_KEY_TYPE: &str = "valid";
    pub const DELETE_TIME: &str = "04:00";
    pub const DELETE_LIMIT: u32 = 50;
}

/// One discovered credential record, exactly as the scanner returned it.
/// `key` is the natural identity within a fetch result; duplicates are
/// kept in returned order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyAsset {
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_key_type")]
    pub key_type: String,
    #[serde(default)]
    pub recheck_status: String,
    #[serde(default)]
    pub last_verified_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

fn default_key_type() -> String {
    defaults::SYNC_KEY_TYPE.to_string()
}

/// Connection settings as read back from the remote store. The secret is
/// never echoed; at most a masked suffix comes back for display.
#[derive(Clone, Debug, Deserialize)]
pub struct ScannerConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key_masked: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout: u32,
    #[serde(default = "default_fetch_limit")]
    pub default_limit: u32,
}

/// Write-side connection settings. Carries the credential for exactly one
/// save round trip.
#[derive(Clone, Debug, Serialize)]
pub struct ScannerConfigUpdate {
    pub base_url: String,
    pub api_key: String,
    pub timeout: u32,
    pub default_limit: u32,
}

fn default_timeout() -> u32 {
    defaults::TIMEOUT_SECONDS
}

fn default_fetch_limit() -> u32 {
    defaults::FETCH_LIMIT
}

/// The composite schedule document: three independently toggled daily
/// jobs sharing one store entry. Saved whole on every save, never merged.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub reverify_enabled: bool,
    #[serde(default = "default_reverify_time")]
    pub reverify_time: String,
    #[serde(default = "default_reverify_count")]
    pub reverify_count: u32,
    #[serde(default, deserialize_with = "nullable_list")]
    pub reverify_statuses: Vec<String>,
    #[serde(default)]
    pub sync_enabled: bool,
    #[serde(default = "default_sync_time")]
    pub sync_time: String,
    #[serde(default = "default_sync_limit")]
    pub sync_limit: u32,
    #[serde(default = "default_sync_type")]
    pub sync_type: String,
    #[serde(default)]
    pub delete_enabled: bool,
    #[serde(default = "default_delete_time")]
    pub delete_time: String,
    #[serde(default = "default_delete_limit")]
    pub delete_limit: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            reverify_enabled: false,
            reverify_time: defaults::REVERIFY_TIME.to_string(),
            reverify_count: defaults::REVERIFY_COUNT,
            reverify_statuses: Vec::new(),
            sync_enabled: false,
            sync_time: defaults::SYNC_TIME.to_string(),
            sync_limit: defaults::SYNC_LIMIT,
            sync_type: defaults::SYNC_KEY_TYPE.to_string(),
            delete_enabled: false,
            delete_time: defaults::DELETE_TIME.to_string(),
            delete_limit: defaults::DELETE_LIMIT,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_time_of_day("reverify_time", &self.reverify_time)?;
        validate_time_of_day("sync_time", &self.sync_time)?;
        validate_time_of_day("delete_time", &self.delete_time)?;
        Ok(())
    }
}

fn validate_time_of_day(field: &str, value: &str) -> anyhow::Result<()> {
    let parts: Vec<&str> = value.split(':').collect();
    let valid = parts.len() == 2
        && parts[0].len() == 2
        && parts[1].len() == 2
        && parts[0].parse::<u8>().is_ok_and(|h| h < 24)
        && parts[1].parse::<u8>().is_ok_and(|m| m < 60);
    if !valid {
        anyhow::bail!("{field} must be HH:MM, got {value:?}");
    }
    Ok(())
}

fn default_reverify_time() -> String {
    defaults::REVERIFY_TIME.to_string()
}

fn default_reverify_count() -> u32 {
    defaults::REVERIFY_COUNT
}

fn default_sync_time() -> String {
    defaults::SYNC_TIME.to_string()
}

fn default_sync_limit() -> u32 {
    defaults::SYNC_LIMIT
}

fn default_sync_type() -> String {
    defaults::SYNC_KEY_TYPE.to_string()
}

fn default_delete_time() -> String {
    defaults::DELETE_TIME.to_string()
}

fn default_delete_limit() -> u32 {
    defaults::DELETE_LIMIT
}

// The store may send `null` where the document has never been saved.
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Coerce free-form numeric input to a number, falling back to the
/// documented default on empty or unparseable text.
pub fn number_or(raw: Option<&str>, fallback: u32) -> u32 {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

/// Split a comma-separated status filter, trimming and dropping empties.
pub fn parse_statuses(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|status| !status.is_empty())
        .map(str::to_string)
        .collect()
}
