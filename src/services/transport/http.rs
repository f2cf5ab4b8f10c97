use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;

use super::AvailabilityTransport;
use crate::models::slot::AvailabilityPayload;

/// Loads with `GET fetch_url`, saves with a JSON `POST save_url`.
pub struct HttpTransport {
    client: Client,
    fetch_url: String,
    save_url: String,
}

impl HttpTransport {
    pub fn new(fetch_url: &str, save_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build availability HTTP client")?;

        Ok(Self {
            client,
            fetch_url: fetch_url.to_string(),
            save_url: save_url.to_string(),
        })
    }
}

impl AvailabilityTransport for HttpTransport {
    fn fetch(&self) -> Result<AvailabilityPayload> {
        let response = self
            .client
            .get(&self.fetch_url)
            .send()
            .context("Network error while loading availability")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Availability load failed with HTTP status {}", status));
        }

        response
            .json::<AvailabilityPayload>()
            .context("Availability response is not a valid payload")
    }

    fn persist(&self, payload: &AvailabilityPayload) -> Result<()> {
        let response = self
            .client
            .post(&self.save_url)
            .json(payload)
            .send()
            .context("Network error while saving availability")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Availability save failed with HTTP status {}", status));
        }

        Ok(())
    }

    fn describe(&self) -> String {
        format!("http {} / {}", self.fetch_url, self.save_url)
    }
}
