//! A ratio of two related quantities, expressed in terms of an amount
//! of numerator unit per single denominator unit.

mod ops;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RateError;
use crate::measurement::Measurement;
use crate::unit::{Dimension, Unit};

/// An amount of the numerator unit per single denominator unit
/// (e.g. cubic feet per second).
///
/// The value is carried in the concrete unit pair the rate was
/// constructed with; nothing is normalized to base units until two
/// rates expressed in differing units are combined. Combining
/// operations keep the left operand's units and convert the right
/// operand into them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate<N: Unit, D: Unit> {
    /// The amount of the numerator unit per single denominator unit.
    pub value: f64,
    /// The numerator unit.
    pub numerator_unit: N,
    /// The denominator unit.
    pub denominator_unit: D,
}

impl<N: Unit, D: Unit> Rate<N, D> {
    /// Creates a rate from a raw value and the unit pair it is
    /// expressed in. No conversion is performed.
    pub fn new(value: f64, numerator_unit: N, denominator_unit: D) -> Self {
        Self {
            value,
            numerator_unit,
            denominator_unit,
        }
    }

    /// Creates a rate from a numerator and a denominator measurement.
    ///
    /// The value is the plain quotient of the two measurement values;
    /// the units are taken verbatim from the operands, with no
    /// conversion at construction time. The denominator value must be
    /// strictly positive.
    pub fn from_measurements(
        numerator: Measurement<N>,
        denominator: Measurement<D>,
    ) -> Result<Self, RateError> {
        if !(denominator.value > 0.0) {
            return Err(RateError::NonPositiveDenominator(denominator.value));
        }
        Ok(Self::new(
            numerator.value / denominator.value,
            numerator.unit,
            denominator.unit,
        ))
    }

    /// The rate symbol: numerator symbol, `/`, denominator symbol.
    pub fn symbol(&self) -> String {
        format!(
            "{}/{}",
            self.numerator_unit.symbol(),
            self.denominator_unit.symbol()
        )
    }

    /// Returns this rate scaled by `scalar`, in the same units.
    pub fn multiplied_by(self, scalar: f64) -> Self {
        Self::new(self.value * scalar, self.numerator_unit, self.denominator_unit)
    }

    /// Returns this rate divided by `scalar`, in the same units.
    ///
    /// A zero divisor follows IEEE-754 semantics (the result is
    /// infinite or NaN); callers needing strictness validate first.
    pub fn divided_by(self, scalar: f64) -> Self {
        Self::new(self.value / scalar, self.numerator_unit, self.denominator_unit)
    }
}

impl<N: Dimension, D: Dimension> Rate<N, D> {
    /// Returns the sum of this rate and `other`, in this rate's units.
    ///
    /// `other` is re-expressed in this rate's unit pair first: its
    /// numerator value converts through the numerator dimension's base
    /// unit, and the result is rescaled by the ratio of the two
    /// denominator units' conversion factors.
    pub fn adding(self, other: Rate<N, D>) -> Self {
        let value = self.value + self.value_in_own_units(&other);
        Self::new(value, self.numerator_unit, self.denominator_unit)
    }

    /// Returns the difference between this rate and `other`, in this
    /// rate's units. Converts `other` exactly as [`Rate::adding`] does.
    pub fn subtracting(self, other: Rate<N, D>) -> Self {
        let value = self.value - self.value_in_own_units(&other);
        Self::new(value, self.numerator_unit, self.denominator_unit)
    }

    /// Applies this rate over an amount of the denominator quantity,
    /// yielding a measurement of the numerator quantity (flow rate
    /// multiplied by a duration gives a volume).
    ///
    /// The measurement is converted into this rate's denominator unit
    /// before scaling.
    pub fn multiplied_by_measurement(self, measurement: Measurement<D>) -> Measurement<N> {
        let amount = measurement.converted(self.denominator_unit).value;
        Measurement::new(self.value * amount, self.numerator_unit)
    }

    /// Re-expresses `other`'s value in this rate's unit pair.
    fn value_in_own_units(&self, other: &Rate<N, D>) -> f64 {
        let numerator = self
            .numerator_unit
            .value_from_base_unit(other.numerator_unit.base_unit_value(other.value));
        // How many of our denominator units one of `other`'s spans.
        let span = self
            .denominator_unit
            .value_from_base_unit(other.denominator_unit.base_unit_value(1.0));
        numerator / span
    }
}

impl<N: Unit, D: Unit> fmt::Display for Rate<N, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.symbol())
    }
}
