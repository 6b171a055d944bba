//! Model definitions for Green Button readings and InfluxDB data points.
//!
//! Readings are what the utility's feed contains; meter points are what
//! ends up in InfluxDB.

pub mod metrics;
pub mod reading;
pub mod traits;
pub mod types;

pub use metrics::MeterPoint;
pub use reading::IntervalReading;
pub use traits::{DataPointBuilder, PointWriter};
