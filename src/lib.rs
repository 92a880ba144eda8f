//! A generic rate type: an amount of one quantity per single unit of
//! another, such as liters per second or kilograms per meter.
//!
//! [`Rate<N, D>`] carries its scalar value in the concrete unit pair it
//! was constructed with. Arithmetic that combines two rates, or a rate
//! with a [`Measurement`] of the denominator dimension, converts the
//! right operand through each dimension's base unit so operands in
//! differing units combine correctly.
//!
//! ```
//! use rate_core::units::{DurationUnit, VolumeUnit};
//! use rate_core::{Measurement, Rate};
//!
//! let flow = Rate::new(1.0, VolumeUnit::Liters, DurationUnit::Seconds);
//! let minute = Measurement::new(1.0, DurationUnit::Minutes);
//!
//! assert_eq!((flow * minute).value, 60.0);
//! ```

pub mod error;
pub mod measurement;
pub mod rate;
pub mod unit;
pub mod units;

pub use error::RateError;
pub use measurement::Measurement;
pub use rate::Rate;
pub use unit::{Dimension, Unit};
