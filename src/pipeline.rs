//! One scrape of the utility portal, from login to InfluxDB.
//!
//! A run moves through `authenticate -> resolve_key -> fetch_feed -> decode ->
//! export` exactly once. The first failing stage ends the run; nothing is
//! retried here and nothing is exported for a failed run. Every run builds
//! its own session and date window, so runs share no state.

use crate::config::PortalConfig;
use crate::error::{PipelineError, Result, Stage};
use crate::espi;
use crate::exporter::Exporter;
use crate::model::PointWriter;
use crate::portal::{self, DateWindow, Session};
use chrono::{DateTime, Local};
use reqwest::Certificate;
use std::sync::Arc;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RunReport {
    /// Readings decoded from the feed and handed to the exporter
    pub readings: usize,
}

pub struct Pipeline {
    config: Arc<PortalConfig>,
    root_certificates: Vec<Certificate>,
    exporter: Exporter,
}

impl Pipeline {
    pub fn new(
        config: Arc<PortalConfig>,
        root_certificates: Vec<Certificate>,
        writer: Arc<dyn PointWriter>,
    ) -> Self {
        Self {
            config,
            root_certificates,
            exporter: Exporter::new(writer),
        }
    }

    /// Runs every stage once, using `now` to place the date window.
    pub async fn run(&self, now: DateTime<Local>) -> Result<RunReport> {
        let credentials = self.config.credentials();

        let session = Session::new(&credentials, &self.root_certificates)
            .map_err(|e| PipelineError::at(Stage::Authenticate, e))?;
        session
            .login(&credentials)
            .await
            .map_err(|e| PipelineError::at(Stage::Authenticate, e))?;

        let window = DateWindow::ending_at(now, self.config.lookback_days);
        tracing::debug!("Requesting export for {} to {}", window.from, window.to);
        let key = portal::request_key(&session, &window)
            .await
            .map_err(|e| PipelineError::at(Stage::ResolveKey, e))?;

        let feed = portal::fetch(&session, key)
            .await
            .map_err(|e| PipelineError::at(Stage::FetchFeed, e))?;

        let readings = espi::decode(&feed).map_err(|e| PipelineError::at(Stage::Decode, e))?;
        tracing::info!("Parsed {} interval readings", readings.len());
        for reading in &readings {
            tracing::debug!("{:?}", reading);
        }

        self.exporter.export(&readings).await;

        Ok(RunReport {
            readings: readings.len(),
        })
    }
}
