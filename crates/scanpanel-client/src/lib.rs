pub mod actions;
pub mod config;
pub mod error;
mod http;
pub mod schedule;
pub mod wire;

pub use error::FetchError;

use reqwest::blocking::Client;

/// Blocking client for the panel's `/api/scanner/*` endpoints. One
/// instance per session; every call is a single attempt with no retry
/// and no client-side deadline beyond the transport's own.
pub struct ScannerClient {
    client: Client,
    panel_url: String,
}

impl ScannerClient {
    pub fn new(panel_url: &str) -> anyhow::Result<Self> {
        let panel_url = panel_url.trim().trim_end_matches('/').to_string();
        if panel_url.is_empty() {
            anyhow::bail!("panel url must not be empty");
        }
        Ok(Self {
            client: Client::new(),
            panel_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/scanner/{path}", self.panel_url)
    }
}
