use crate::config::InfluxConfig;
use crate::error::StorageError;
use crate::model::PointWriter;
use anyhow::Context;
use async_trait::async_trait;
use futures::prelude::stream;
use influxdb2::models::DataPoint;
use influxdb2::ClientBuilder;
use reqwest::Certificate;

pub struct Client {
    client: influxdb2::Client,
    bucket: String,
}

impl Client {
    /// Builds a gzip-compressing client that trusts `root_certificates` on top
    /// of the platform roots.
    pub(crate) fn new(
        config: InfluxConfig,
        root_certificates: &[Certificate],
    ) -> anyhow::Result<Self> {
        let mut http = reqwest::ClientBuilder::new();
        for certificate in root_certificates {
            http = http.add_root_certificate(certificate.clone());
        }
        let client = ClientBuilder::with_builder(http, config.url, config.org, config.token)
            .gzip(true)
            .build()
            .context("Failed to build InfluxDB client")?;
        Ok(Self {
            client,
            bucket: config.bucket,
        })
    }
}

#[async_trait]
impl PointWriter for Client {
    async fn write(&self, points: Vec<DataPoint>) -> Result<(), StorageError> {
        Ok(self
            .client
            .write(self.bucket.as_str(), stream::iter(points))
            .await?)
    }
}
