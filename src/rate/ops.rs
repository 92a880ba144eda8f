//! Operator sugar over the named arithmetic methods.

use std::ops::{Add, Div, Mul, Sub};

use crate::measurement::Measurement;
use crate::unit::{Dimension, Unit};

use super::Rate;

impl<N: Dimension, D: Dimension> Add for Rate<N, D> {
    type Output = Rate<N, D>;

    fn add(self, rhs: Rate<N, D>) -> Self::Output {
        self.adding(rhs)
    }
}

impl<N: Dimension, D: Dimension> Sub for Rate<N, D> {
    type Output = Rate<N, D>;

    fn sub(self, rhs: Rate<N, D>) -> Self::Output {
        self.subtracting(rhs)
    }
}

impl<N: Unit, D: Unit> Mul<f64> for Rate<N, D> {
    type Output = Rate<N, D>;

    fn mul(self, rhs: f64) -> Self::Output {
        self.multiplied_by(rhs)
    }
}

impl<N: Unit, D: Unit> Div<f64> for Rate<N, D> {
    type Output = Rate<N, D>;

    fn div(self, rhs: f64) -> Self::Output {
        self.divided_by(rhs)
    }
}

impl<N: Dimension, D: Dimension> Mul<Measurement<D>> for Rate<N, D> {
    type Output = Measurement<N>;

    fn mul(self, rhs: Measurement<D>) -> Self::Output {
        self.multiplied_by_measurement(rhs)
    }
}

impl<N: Dimension, D: Dimension> Mul<Rate<N, D>> for Measurement<D> {
    type Output = Measurement<N>;

    fn mul(self, rhs: Rate<N, D>) -> Self::Output {
        rhs.multiplied_by_measurement(self)
    }
}
