use crate::portal::session::Credentials;
use anyhow::{anyhow, Context, Result};
use reqwest::Certificate;
use serde_derive::Deserialize;
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load AppConfig: {}", err)),
    }
}

fn default_interval_sec() -> u64 {
    6 * 60 * 60
}

fn default_task_timeout_seconds() -> u64 {
    300
}

#[derive(Deserialize, Debug)]
pub struct SchedulerConfig {
    #[serde(default = "default_interval_sec")]
    pub interval_sec: u64,
    #[serde(default = "default_task_timeout_seconds")]
    pub task_timeout_seconds: u64,
}

pub fn load_scheduler_config() -> Result<SchedulerConfig> {
    match envy::prefixed("SCHEDULER_").from_env::<SchedulerConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load SchedulerConfig: {}", err)),
    }
}

fn default_lookback_days() -> u32 {
    2
}

#[derive(Deserialize, Debug, Clone)]
pub struct PortalConfig {
    pub url: String,
    pub email: String,
    pub password: String,
    // PEM bundle added to the transport's trusted roots
    #[serde(default)]
    pub root_cas: Option<String>,
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
}

impl PortalConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            base_url: self.url.trim_end_matches('/').to_string(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Parses `root_cas` once; the certificates are trusted by both the
    /// portal session and the InfluxDB client.
    pub fn root_certificates(&self) -> Result<Vec<Certificate>> {
        match &self.root_cas {
            Some(pem) => Certificate::from_pem_bundle(pem.as_bytes())
                .context("Failed to parse PORTAL_ROOT_CAS"),
            None => Ok(Vec::new()),
        }
    }
}

pub(crate) fn load_portal_config() -> Result<PortalConfig> {
    match envy::prefixed("PORTAL_").from_env::<PortalConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load PortalConfig: {}", err)),
    }
}

#[derive(Deserialize, Debug)]
pub struct InfluxConfig {
    pub url: String,
    pub token: String,
    pub org: String,
    pub bucket: String,
}

pub fn load_influx_config() -> Result<InfluxConfig> {
    match envy::prefixed("INFLUXDB_").from_env::<InfluxConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load InfluxConfig: {}", err)),
    }
}
