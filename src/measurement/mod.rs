//! A scalar value paired with a concrete unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::unit::{Dimension, Unit};

/// A scalar amount of some quantity, expressed in a concrete unit.
///
/// Plain immutable value type; operations return new instances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement<U: Unit> {
    /// The scalar amount, in `unit`.
    pub value: f64,
    /// The unit the amount is expressed in.
    pub unit: U,
}

impl<U: Unit> Measurement<U> {
    /// Creates a measurement from a value and the unit it is expressed in.
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }
}

impl<U: Dimension> Measurement<U> {
    /// Re-expresses this measurement in another unit of the same
    /// dimension, converting through the dimension's base unit.
    pub fn converted(&self, to: U) -> Measurement<U> {
        let value = to.value_from_base_unit(self.unit.base_unit_value(self.value));
        Measurement::new(value, to)
    }
}

impl<U: Unit> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use crate::units::{DurationUnit, LengthUnit, VolumeUnit};

    use super::*;

    #[test]
    fn conversion_goes_through_the_base_unit() {
        let minute = Measurement::new(1.0, DurationUnit::Minutes);
        let seconds = minute.converted(DurationUnit::Seconds);

        assert_eq!(seconds.value, 60.0);
        assert_eq!(seconds.unit, DurationUnit::Seconds);
    }

    #[test]
    fn conversion_round_trips() {
        let feet = Measurement::new(3.0, LengthUnit::Feet);
        let back = feet.converted(LengthUnit::Meters).converted(LengthUnit::Feet);

        assert!((back.value - 3.0).abs() < 1e-12);
        assert_eq!(back.unit, LengthUnit::Feet);
    }

    #[test]
    fn conversion_to_same_unit_is_identity() {
        let volume = Measurement::new(2.5, VolumeUnit::Liters);
        assert_eq!(volume.converted(VolumeUnit::Liters), volume);
    }

    #[test]
    fn display_renders_value_and_symbol() {
        let volume = Measurement::new(1.5, VolumeUnit::Milliliters);
        assert_eq!(volume.to_string(), "1.5 mL");
    }

    #[test]
    fn serde_round_trip_preserves_value_and_unit() {
        let duration = Measurement::new(42.0, DurationUnit::Hours);
        let json = serde_json::to_string(&duration).unwrap();
        let back: Measurement<DurationUnit> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, duration);
    }
}
