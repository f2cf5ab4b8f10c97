use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::AvailabilityTransport;
use crate::models::slot::AvailabilityPayload;

/// Keeps the payload as a pretty-printed JSON snapshot on disk.
pub struct JsonFileTransport {
    path: PathBuf,
}

impl JsonFileTransport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AvailabilityTransport for JsonFileTransport {
    fn fetch(&self) -> Result<AvailabilityPayload> {
        if !self.path.exists() {
            return Ok(AvailabilityPayload::new());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read availability from {}", self.path.display()))?;
        serde_json::from_str(&data).with_context(|| {
            format!(
                "failed to deserialize availability from {}",
                self.path.display()
            )
        })
    }

    fn persist(&self, payload: &AvailabilityPayload) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write availability to {}", self.path.display()))?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
