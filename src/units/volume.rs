use serde::{Deserialize, Serialize};

use crate::unit::{Dimension, Unit};

/// Units of volume. Base unit: liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    Liters,
    Milliliters,
    CubicMeters,
    CubicFeet,
    Megaliters,
}

impl Unit for VolumeUnit {
    fn symbol(&self) -> &str {
        match self {
            VolumeUnit::Liters => "L",
            VolumeUnit::Milliliters => "mL",
            VolumeUnit::CubicMeters => "m³",
            VolumeUnit::CubicFeet => "ft³",
            VolumeUnit::Megaliters => "ML",
        }
    }
}

impl Dimension for VolumeUnit {
    fn coefficient(&self) -> f64 {
        match self {
            VolumeUnit::Liters => 1.0,
            VolumeUnit::Milliliters => 0.001,
            VolumeUnit::CubicMeters => 1000.0,
            VolumeUnit::CubicFeet => 28.316846592,
            VolumeUnit::Megaliters => 1_000_000.0,
        }
    }
}
