use crate::ScannerClient;
use crate::error::FetchError;
use crate::http::{decode, require_success, send};
use scanpanel_core::model::{ScannerConfig, ScannerConfigUpdate};
use tracing::info;

impl ScannerClient {
    /// Read the connection settings. The secret never comes back from
    /// the remote read, only a masked suffix for display.
    pub fn load_config(&self) -> Result<ScannerConfig, FetchError> {
        let response = send(self.client.get(self.endpoint("config")))?;
        let response = require_success(response)?;
        let config: ScannerConfig = decode(response)?;
        info!(base_url = %config.base_url, default_limit = config.default_limit, "loaded scanner config");
        Ok(config)
    }

    /// Write the full connection settings in one round trip. The caller
    /// drops its copy of the credential once this returns `Ok`.
    pub fn save_config(&self, update: &ScannerConfigUpdate) -> Result<(), FetchError> {
        info!(base_url = %update.base_url, "saving scanner config");
        let response = send(self.client.put(self.endpoint("config")).json(update))?;
        require_success(response)?;
        Ok(())
    }
}
