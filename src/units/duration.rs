use serde::{Deserialize, Serialize};

use crate::unit::{Dimension, Unit};

/// Units of duration. Base unit: seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
}

impl Unit for DurationUnit {
    fn symbol(&self) -> &str {
        match self {
            DurationUnit::Seconds => "s",
            DurationUnit::Minutes => "min",
            DurationUnit::Hours => "h",
        }
    }
}

impl Dimension for DurationUnit {
    fn coefficient(&self) -> f64 {
        match self {
            DurationUnit::Seconds => 1.0,
            DurationUnit::Minutes => 60.0,
            DurationUnit::Hours => 3600.0,
        }
    }
}
