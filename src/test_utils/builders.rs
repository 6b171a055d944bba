//! Builders for test readings.

use crate::model::reading::{IntervalReading, TimePeriod};
use chrono::DateTime;
use std::time::Duration;

/// Builder for `IntervalReading` values with hourly defaults.
#[derive(Debug)]
pub struct IntervalReadingBuilder {
    cost: u32,
    value: u32,
    duration_secs: u64,
    start: i64,
}

impl IntervalReadingBuilder {
    pub fn new() -> Self {
        Self {
            cost: 100,
            value: 25,
            duration_secs: 3600,
            start: 1_700_000_000,
        }
    }

    pub fn cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn value(mut self, value: u32) -> Self {
        self.value = value;
        self
    }

    pub fn duration_secs(mut self, seconds: u64) -> Self {
        self.duration_secs = seconds;
        self
    }

    /// Sets the interval start as Unix epoch seconds.
    pub fn start(mut self, epoch_seconds: i64) -> Self {
        self.start = epoch_seconds;
        self
    }

    pub fn build(self) -> IntervalReading {
        IntervalReading {
            cost: self.cost,
            value: self.value,
            time_period: TimePeriod {
                duration: Duration::from_secs(self.duration_secs),
                start: DateTime::from_timestamp(self.start, 0).unwrap(),
            },
        }
    }
}
