use crate::error::StorageError;
use async_trait::async_trait;
use influxdb2::models::DataPoint;

/// Trait for types that can be converted to InfluxDB data points.
///
/// Implementors must be thread-safe (Send + Sync) so points can be built
/// inside spawned tasks.
pub trait DataPointBuilder: Send + Sync {
    /// Converts the metric into an InfluxDB DataPoint.
    ///
    /// # Returns
    /// - `Ok(DataPoint)` if conversion succeeds
    /// - `Err` if the metric data cannot be converted to a valid DataPoint
    fn to_point(&self) -> Result<DataPoint, StorageError>;
}

/// Write side of the metrics store.
///
/// A completed `write` means every point has been handed to the store.
#[async_trait]
pub trait PointWriter: Send + Sync {
    async fn write(&self, points: Vec<DataPoint>) -> Result<(), StorageError>;
}
