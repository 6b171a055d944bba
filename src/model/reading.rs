use chrono::{DateTime, Utc};
use serde_derive::Deserialize;
use std::time::Duration;

use crate::espi::codec;

/// One hourly (or daily) usage interval from an ESPI `IntervalReading`.
///
/// `<espi:IntervalReading><espi:cost>150</espi:cost><espi:value>42</espi:value>
/// <espi:timePeriod>...</espi:timePeriod></espi:IntervalReading>`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IntervalReading {
    /// Cost in the smallest currency unit. Optional in ESPI.
    #[serde(default)]
    pub cost: u32,
    /// Energy in the feed's reading-type unit (typically Wh).
    #[serde(default)]
    pub value: u32,
    #[serde(rename = "timePeriod")]
    pub time_period: TimePeriod,
}

impl IntervalReading {
    /// Both counters zero means the utility has not published the interval yet.
    pub fn is_placeholder(&self) -> bool {
        self.cost == 0 && self.value == 0
    }
}

/// `<espi:timePeriod><espi:duration>3600</espi:duration><espi:start>1659675600</espi:start></espi:timePeriod>`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TimePeriod {
    #[serde(deserialize_with = "codec::duration_seconds")]
    pub duration: Duration,
    #[serde(deserialize_with = "codec::unix_seconds")]
    pub start: DateTime<Utc>,
}
