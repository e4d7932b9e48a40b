use crate::ScannerClient;
use crate::error::FetchError;
use crate::http::{decode, require_success, send};
use scanpanel_core::model::ScheduleConfig;
use tracing::info;

impl ScannerClient {
    /// Read the composite three-job schedule document. Missing fields
    /// fall back to the documented defaults.
    pub fn load_schedule(&self) -> Result<ScheduleConfig, FetchError> {
        let response = send(self.client.get(self.endpoint("schedule")))?;
        let response = require_success(response)?;
        decode(response)
    }

    /// Write the whole document. There is no partial save; the status
    /// filter goes out as an explicit list even when empty.
    pub fn save_schedule(&self, schedule: &ScheduleConfig) -> Result<(), FetchError> {
        info!(
            reverify = schedule.reverify_enabled,
            sync = schedule.sync_enabled,
            delete = schedule.delete_enabled,
            "saving schedule"
        );
        let response = send(self.client.put(self.endpoint("schedule")).json(schedule))?;
        require_success(response)?;
        Ok(())
    }
}
