//! Where compressed availability lives between sessions.

mod file;
mod http;

pub use file::JsonFileTransport;
pub use http::HttpTransport;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::models::settings::TimeBrushConfig;
use crate::models::slot::AvailabilityPayload;
use crate::services::settings::default_storage_path;

#[cfg_attr(test, mockall::automock)]
pub trait AvailabilityTransport {
    /// Reads the persisted payload.
    fn fetch(&self) -> Result<AvailabilityPayload>;

    /// Replaces the persisted payload.
    fn persist(&self, payload: &AvailabilityPayload) -> Result<()>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

pub type SharedTransport = Arc<dyn AvailabilityTransport + Send + Sync>;

/// HTTP when both endpoints are configured, otherwise a local JSON file.
pub fn from_config(config: &TimeBrushConfig) -> Result<SharedTransport> {
    match (&config.fetch_url, &config.save_url) {
        (Some(fetch_url), Some(save_url)) => {
            let timeout = Duration::from_secs(config.request_timeout_secs.max(1));
            let transport = HttpTransport::new(fetch_url, save_url, timeout)?;
            Ok(Arc::new(transport))
        }
        (Some(_), None) | (None, Some(_)) => Err(anyhow!(
            "Both fetch_url and save_url must be configured for HTTP sync"
        )),
        (None, None) => {
            let path = match &config.storage_path {
                Some(path) => path.clone(),
                None => default_storage_path()
                    .ok_or_else(|| anyhow!("No storage_path configured and no data directory available"))?,
            };
            Ok(Arc::new(JsonFileTransport::new(path)))
        }
    }
}
