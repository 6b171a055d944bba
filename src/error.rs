//! Error types for the Green Button to InfluxDB2 forwarder.
//!
//! Each pipeline stage has its own typed error so a failed run can report
//! exactly which step of the portal interaction broke.

use std::fmt;
use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

/// Login step errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Network or TLS failure, including building the HTTP transport
    #[error("login request failed: {0}")]
    TransportFailure(#[from] reqwest::Error),

    /// The portal refused the credentials
    #[error("login rejected: {0}")]
    Rejected(String),
}

/// Download key request errors.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Network failure while requesting the key page
    #[error("key request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The portal answered with a non-200 status
    #[error("key request rejected (status {status})")]
    Rejected { status: u16 },

    /// The download form or its action attribute is missing
    #[error("download key not found: {selector}")]
    NotFound { selector: String },
}

/// Feed download errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure while downloading the feed
    #[error("feed download failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The portal answered with a non-200 status
    #[error("feed download returned status {status}: {body}")]
    BadStatus { status: u16, body: String },
}

/// Green Button XML decoding errors.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The document is not well-formed XML
    #[error("malformed XML: {0}")]
    MalformedXML(String),

    /// An IntervalReading node did not match the expected shape
    #[error("malformed IntervalReading: {0}")]
    MalformedField(#[from] quick_xml::DeError),
}

/// InfluxDB storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// InfluxDB client error
    #[error("InfluxDB error: {0}")]
    Client(#[from] influxdb2::RequestError),

    /// Invalid data point
    #[error("invalid data point: {0}")]
    InvalidDataPoint(String),
}

/// Pipeline stages that can fail a run, in execution order.
///
/// Export comes last and is best effort, so it never appears here.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Stage {
    Authenticate,
    ResolveKey,
    FetchFeed,
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Authenticate => write!(f, "authenticate"),
            Stage::ResolveKey => write!(f, "resolve_key"),
            Stage::FetchFeed => write!(f, "fetch_feed"),
            Stage::Decode => write!(f, "decode"),
        }
    }
}

/// The error produced by whichever stage failed.
#[derive(Error, Debug)]
pub enum StageError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Terminal failure of a pipeline run, tagged with the stage that produced it.
#[derive(Error, Debug)]
#[error("pipeline failed at stage '{stage}': {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: StageError,
}

impl PipelineError {
    /// Tags a stage error with the stage it came from.
    pub fn at(stage: Stage, source: impl Into<StageError>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }
}

impl AuthError {
    /// Creates a rejected-login error.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

impl KeyError {
    /// Creates a key not found error.
    pub fn not_found(selector: impl Into<String>) -> Self {
        Self::NotFound {
            selector: selector.into(),
        }
    }
}

impl FetchError {
    /// Creates a bad status error from HTTP status and response body.
    pub fn bad_status(status: reqwest::StatusCode, body: String) -> Self {
        Self::BadStatus {
            status: status.as_u16(),
            body,
        }
    }
}

impl DecodeError {
    /// Creates a malformed XML error.
    pub fn malformed_xml(err: impl fmt::Display) -> Self {
        Self::MalformedXML(err.to_string())
    }
}
