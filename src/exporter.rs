use crate::model::{DataPointBuilder, IntervalReading, MeterPoint, PointWriter};
use influxdb2::models::DataPoint;
use std::sync::Arc;

/// Turns decoded readings into meter points and hands them to the store.
///
/// Export is best effort: a point that fails to build is logged and left out,
/// and a failed write is logged rather than failing the run.
pub struct Exporter {
    writer: Arc<dyn PointWriter>,
}

impl Exporter {
    pub fn new(writer: Arc<dyn PointWriter>) -> Self {
        Self { writer }
    }

    /// Converts every reading and writes the batch, returning once the write has finished.
    pub async fn export(&self, readings: &[IntervalReading]) {
        let points = build_points(readings);
        if points.is_empty() {
            tracing::info!("No meter points to write");
            return;
        }

        let count = points.len();
        match self.writer.write(points).await {
            Ok(_) => tracing::info!("Successfully wrote {} meter points to InfluxDB", count),
            Err(e) => tracing::error!("Failed to write {} meter points to InfluxDB: {:?}", count, e),
        }
    }
}

fn build_points(readings: &[IntervalReading]) -> Vec<DataPoint> {
    readings
        .iter()
        .map(MeterPoint::from)
        .filter_map(|point| match point.to_point() {
            Ok(data_point) => Some(data_point),
            Err(e) => {
                tracing::error!("Failed to convert to point: {:?}", e);
                None
            }
        })
        .collect()
}
