use serde::{Deserialize, Serialize};

use crate::unit::{Dimension, Unit};

/// Units of length. Base unit: meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Feet,
    Miles,
}

impl Unit for LengthUnit {
    fn symbol(&self) -> &str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
            LengthUnit::Feet => "ft",
            LengthUnit::Miles => "mi",
        }
    }
}

impl Dimension for LengthUnit {
    fn coefficient(&self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => 1000.0,
            LengthUnit::Feet => 0.3048,
            LengthUnit::Miles => 1609.344,
        }
    }
}
