//! Configuration utilities for testing.

use crate::config::{InfluxConfig, PortalConfig};

/// Builder for creating test portal configurations.
#[derive(Debug)]
pub struct TestPortalConfigBuilder {
    url: String,
    email: String,
    password: String,
    root_cas: Option<String>,
    lookback_days: u32,
}

impl TestPortalConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            url: "http://test.local".to_string(),
            email: "test@example.com".to_string(),
            password: "test_password".to_string(),
            root_cas: None,
            lookback_days: 2,
        }
    }

    /// Sets the portal base URL, usually a mock server's.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the PEM bundle of extra trusted roots.
    pub fn with_root_cas(mut self, pem: impl Into<String>) -> Self {
        self.root_cas = Some(pem.into());
        self
    }

    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    pub fn build(self) -> PortalConfig {
        PortalConfig {
            url: self.url,
            email: self.email,
            password: self.password,
            root_cas: self.root_cas,
            lookback_days: self.lookback_days,
        }
    }
}

/// Builder for creating test InfluxDB configurations.
#[derive(Debug)]
pub struct TestInfluxConfigBuilder {
    url: String,
    org: String,
    token: String,
    bucket: String,
}

impl TestInfluxConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            url: "http://localhost:8086".to_string(),
            org: "test-org".to_string(),
            token: "test-token".to_string(),
            bucket: "test-bucket".to_string(),
        }
    }

    /// Sets the URL for the test configuration.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the bucket for the test configuration.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Builds the InfluxDB configuration.
    pub fn build(self) -> InfluxConfig {
        InfluxConfig {
            url: self.url,
            org: self.org,
            token: self.token,
            bucket: self.bucket,
        }
    }
}

/// Creates a test InfluxDB configuration pointing at `url`.
pub fn test_influx_config_with_url(url: impl Into<String>) -> InfluxConfig {
    TestInfluxConfigBuilder::new().with_url(url).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_config_builder() {
        let config = TestPortalConfigBuilder::new()
            .with_url("http://portal.local")
            .with_email("someone@example.com")
            .with_lookback_days(5)
            .build();

        assert_eq!(config.url, "http://portal.local");
        assert_eq!(config.email, "someone@example.com");
        assert_eq!(config.password, "test_password");
        assert_eq!(config.lookback_days, 5);
        assert!(config.root_cas.is_none());
    }

    #[test]
    fn test_influx_config_builder() {
        let config = TestInfluxConfigBuilder::new()
            .with_url("http://influx.local")
            .with_bucket("my-bucket")
            .build();

        assert_eq!(config.url, "http://influx.local");
        assert_eq!(config.org, "test-org");
        assert_eq!(config.bucket, "my-bucket");
    }
}
