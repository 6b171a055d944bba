use crate::error::StorageError;
use chrono::{DateTime, Utc};
use influxdb2::models::DataPoint;

use super::reading::IntervalReading;
use super::traits::DataPointBuilder;
use super::types::{Measurement, MeterField};

/// One meter interval as written to InfluxDB.
///
/// Carries no tags; the measurement name identifies the series.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterPoint {
    /// The measurement type (should be Measurement::Meter)
    pub measurement: Measurement,
    pub cost: i64,
    /// Energy, taken from the reading's `value`
    pub energy: i64,
    /// Interval length in whole seconds
    pub duration: i64,
    /// Start of the interval
    pub timestamp: DateTime<Utc>,
}

impl From<&IntervalReading> for MeterPoint {
    fn from(reading: &IntervalReading) -> Self {
        Self {
            measurement: Measurement::Meter,
            cost: i64::from(reading.cost),
            energy: i64::from(reading.value),
            duration: i64::try_from(reading.time_period.duration.as_secs()).unwrap_or(i64::MAX),
            timestamp: reading.time_period.start,
        }
    }
}

impl DataPointBuilder for MeterPoint {
    fn to_point(&self) -> Result<DataPoint, StorageError> {
        let timestamp = self
            .timestamp
            .timestamp_nanos_opt()
            .ok_or_else(|| StorageError::InvalidDataPoint("Timestamp overflow".to_string()))?;

        DataPoint::builder(self.measurement.to_string().as_str())
            .field(MeterField::Cost.to_string(), self.cost)
            .field(MeterField::Energy.to_string(), self.energy)
            .field(MeterField::Duration.to_string(), self.duration)
            .timestamp(timestamp)
            .build()
            .map_err(|e| StorageError::InvalidDataPoint(format!("Failed to build MeterPoint: {}", e)))
    }
}
