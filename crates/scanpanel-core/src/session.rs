use crate::cache::AssetCache;
use crate::model::{ScannerConfig, ScannerConfigUpdate, defaults};

/// Session-scoped panel state: the asset cache plus the fetch-size floor
/// established by the last config load. One instance per session, owned
/// by the caller; no process-wide singleton.
#[derive(Debug)]
pub struct PanelSession {
    pub cache: AssetCache,
    default_limit: u32,
}

impl Default for PanelSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSession {
    pub fn new() -> Self {
        Self {
            cache: AssetCache::new(),
            default_limit: defaults::FETCH_LIMIT,
        }
    }

    /// Called after a config load to establish the fetch-size default.
    pub fn apply_default_limit(&mut self, limit: u32) {
        self.default_limit = limit;
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_limit)
    }
}

/// In-memory connection form. The credential lives here only between
/// user entry and a successful save; the remote read never refills it.
#[derive(Clone, Debug, Default)]
pub struct ConfigForm {
    pub base_url: String,
    pub api_key: String,
    pub timeout: u32,
    pub default_limit: u32,
}

impl ConfigForm {
    pub fn from_loaded(config: &ScannerConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: String::new(),
            timeout: config.timeout,
            default_limit: config.default_limit,
        }
    }

    pub fn update_payload(&self) -> ScannerConfigUpdate {
        ScannerConfigUpdate {
            base_url: self.base_url.trim().trim_end_matches('/').to_string(),
            api_key: self.api_key.trim().to_string(),
            timeout: self.timeout,
            default_limit: self.default_limit,
        }
    }

    /// Drop the credential once the save round trip succeeded.
    pub fn mark_saved(&mut self) {
        self.api_key.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeyAsset;

    #[test]
    fn session_starts_with_documented_limit() {
        let session = PanelSession::new();
        assert_eq!(session.default_limit(), 50);
        assert!(session.cache.is_empty());
    }

    #[test]
    fn effective_limit_prefers_explicit_request() {
        let mut session = PanelSession::new();
        session.apply_default_limit(10);
        assert_eq!(session.effective_limit(None), 10);
        assert_eq!(session.effective_limit(Some(200)), 200);
    }

    #[test]
    fn form_from_loaded_never_carries_secret() {
        let config = ScannerConfig {
            base_url: "https://scanner.local".to_string(),
            api_key_masked: Some("***abcd".to_string()),
            timeout: 20,
            default_limit: 10,
        };
        let form = ConfigForm::from_loaded(&config);
        assert!(form.api_key.is_empty());
        assert_eq!(form.base_url, "https://scanner.local");
        assert_eq!(form.timeout, 20);
    }

    #[test]
    fn mark_saved_clears_only_the_secret() {
        let mut form = ConfigForm {
            base_url: "https://x".to_string(),
            api_key: "secret".to_string(),
            timeout: 20,
            default_limit: 10,
        };
        form.mark_saved();
        assert!(form.api_key.is_empty());
        assert_eq!(form.base_url, "https://x");
        assert_eq!(form.timeout, 20);
        assert_eq!(form.default_limit, 10);
    }

    #[test]
    fn update_payload_trims_url_and_secret() {
        let form = ConfigForm {
            base_url: " https://x/ ".to_string(),
            api_key: " secret ".to_string(),
            timeout: 15,
            default_limit: 50,
        };
        let payload = form.update_payload();
        assert_eq!(payload.base_url, "https://x");
        assert_eq!(payload.api_key, "secret");
    }

    #[test]
    fn cache_untouched_by_non_fetch_operations() {
        let mut session = PanelSession::new();
        session.cache.replace_all(vec![KeyAsset {
            key: "k1".to_string(),
            key_type: "valid".to_string(),
            recheck_status: "invalid".to_string(),
            last_verified_at: None,
            url: None,
        }]);
        // a delete on the remote side has no cache counterpart
        session.apply_default_limit(5);
        assert_eq!(session.cache.count(), 1);
    }
}
