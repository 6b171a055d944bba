use std::fmt;

/// InfluxDB measurement (table) the forwarder writes to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Measurement {
    /// Interval readings from the utility meter
    Meter,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Measurement::Meter => write!(f, "meter"),
        }
    }
}

/// Field names of a meter point.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum MeterField {
    /// Cost in the smallest currency unit
    Cost,
    /// Energy used during the interval
    Energy,
    /// Interval length in seconds
    Duration,
}

impl fmt::Display for MeterField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MeterField::Cost => write!(f, "cost"),
            MeterField::Energy => write!(f, "energy"),
            MeterField::Duration => write!(f, "duration"),
        }
    }
}
