use scanpanel_core::model::KeyAsset;
use serde::Deserialize;

/// One page of key assets, exactly as returned. `total` is the remote's
/// own count when it reports one.
#[derive(Debug, Deserialize)]
pub struct AssetPage {
    #[serde(default)]
    pub items: Vec<KeyAsset>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Probe outcome. Both flags false with a 2xx response is a valid
/// result, not an error; `error_type` names the failing dimension when
/// the remote reports one.
#[derive(Debug, Deserialize)]
pub struct PingReport {
    #[serde(default)]
    pub connectivity: bool,
    #[serde(default)]
    pub auth: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_type: Option<String>,
}

impl PingReport {
    pub fn is_healthy(&self) -> bool {
        self.connectivity && self.auth
    }

    /// Fixed fallback per failing dimension when the remote sends no
    /// message of its own.
    pub fn failure_message(&self) -> Option<String> {
        if self.connectivity && self.auth {
            return None;
        }
        let fallback = if !self.connectivity {
            "scanner unreachable"
        } else {
            "scanner API key rejected"
        };
        Some(
            self.message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(fallback)
                .to_string(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteOutcome {
    #[serde(default)]
    pub deleted: u64,
    #[serde(default)]
    pub requested: Option<u64>,
}

impl DeleteOutcome {
    pub fn requested_or(&self, limit: u32) -> u64 {
        self.requested.unwrap_or(u64::from(limit))
    }
}

#[derive(Debug, Deserialize)]
pub struct ReverifyOutcome {
    #[serde(default)]
    pub checked: Option<u64>,
}

impl ReverifyOutcome {
    pub fn checked_or(&self, count: u32) -> u64 {
        self.checked.unwrap_or(u64::from(count))
    }
}

/// Sync result; some deployments report `synced`, older ones only a
/// `total`. `synced` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct SyncOutcome {
    #[serde(default)]
    pub synced: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl SyncOutcome {
    pub fn count(&self) -> u64 {
        self.synced.or(self.total).unwrap_or(0)
    }
}
