//! One-shot dataset loader
//!
//! Runs the single dataset read in a background task and reports exactly one
//! [`LoadResponse`] over a channel. There is no retry and no cancellation: a
//! failed load is reported once and the caller keeps an empty dataset.

use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::api::{self, Country, CountriesClient};
use crate::config::Config;

/// Where the dataset comes from
#[derive(Clone)]
pub enum DatasetSource {
    Remote(CountriesClient),
    File(PathBuf),
}

impl DatasetSource {
    /// Pick the source from config: a local file wins over the URL
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.data_file {
            Some(path) => Ok(DatasetSource::File(path.clone())),
            None => Ok(DatasetSource::Remote(CountriesClient::new(
                config.source_url.clone(),
                config.request_timeout(),
            )?)),
        }
    }

    /// Human-readable description for the status bar
    pub fn describe(&self) -> String {
        match self {
            DatasetSource::Remote(client) => client.source_url().to_string(),
            DatasetSource::File(path) => path.display().to_string(),
        }
    }

    /// Perform the read
    pub async fn load(&self) -> Result<Vec<Country>> {
        match self {
            DatasetSource::Remote(client) => client.fetch_countries().await,
            DatasetSource::File(path) => {
                let path = path.clone();
                tokio::task::spawn_blocking(move || api::load_countries_file(&path)).await?
            }
        }
    }
}

/// Outcome of the dataset load
#[derive(Debug)]
pub struct LoadResponse {
    pub countries: Result<Vec<Country>, anyhow::Error>,
    pub elapsed_ms: u64,
}

/// Load the dataset, timing the read
pub async fn load_dataset(source: &DatasetSource) -> LoadResponse {
    let started = Instant::now();
    let countries = source.load().await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match &countries {
        Ok(list) => tracing::info!(
            source = %source.describe(),
            count = list.len(),
            elapsed_ms,
            "dataset loaded"
        ),
        Err(e) => tracing::warn!(
            source = %source.describe(),
            elapsed_ms,
            error = %format!("{:#}", e),
            "dataset load failed"
        ),
    }

    LoadResponse {
        countries,
        elapsed_ms,
    }
}

/// Spawn the loader task; the receiver yields exactly one response
pub fn spawn_dataset_load(source: DatasetSource) -> mpsc::UnboundedReceiver<LoadResponse> {
    let (response_tx, response_rx) = mpsc::unbounded_channel::<LoadResponse>();

    tokio::spawn(async move {
        let response = load_dataset(&source).await;
        // Receiver gone means the app already quit
        let _ = response_tx.send(response);
    });

    response_rx
}
