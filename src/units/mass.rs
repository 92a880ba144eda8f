use serde::{Deserialize, Serialize};

use crate::unit::{Dimension, Unit};

/// Units of mass. Base unit: kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    Kilograms,
    Grams,
    Pounds,
}

impl Unit for MassUnit {
    fn symbol(&self) -> &str {
        match self {
            MassUnit::Kilograms => "kg",
            MassUnit::Grams => "g",
            MassUnit::Pounds => "lb",
        }
    }
}

impl Dimension for MassUnit {
    fn coefficient(&self) -> f64 {
        match self {
            MassUnit::Kilograms => 1.0,
            MassUnit::Grams => 0.001,
            MassUnit::Pounds => 0.45359237,
        }
    }
}
