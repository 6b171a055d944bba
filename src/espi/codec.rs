//! Field adapters for ESPI's integer-encoded time values.
//!
//! ESPI carries durations as a count of seconds and instants as Unix epoch
//! seconds instead of `xs:duration`/`xs:dateTime`, so these are wired in with
//! `#[serde(deserialize_with = ...)]` on the reading types.

use chrono::{DateTime, Utc};
use serde::de::{Deserialize, Deserializer, Error};
use std::time::Duration;

/// Decodes an integer number of seconds into a [`Duration`].
pub fn duration_seconds<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = i64::deserialize(deserializer)?;
    u64::try_from(seconds)
        .map(Duration::from_secs)
        .map_err(|_| D::Error::custom(format!("negative duration: {}", seconds)))
}

/// Decodes integer Unix epoch seconds (UTC) into an absolute timestamp.
pub fn unix_seconds<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = i64::deserialize(deserializer)?;
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", seconds)))
}
