//! Concrete unit families shipped with the crate.
//!
//! Each family is a fieldless enum over its common units, convertible
//! through the family's base unit. Callers with other quantity kinds
//! implement [`crate::unit::Unit`] and [`crate::unit::Dimension`] on
//! their own types the same way.

pub mod duration;
pub mod length;
pub mod mass;
pub mod volume;

pub use duration::DurationUnit;
pub use length::LengthUnit;
pub use mass::MassUnit;
pub use volume::VolumeUnit;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::unit::{Dimension, Unit};

    use super::*;

    #[rstest]
    #[case(DurationUnit::Seconds, 1.0)]
    #[case(DurationUnit::Minutes, 60.0)]
    #[case(DurationUnit::Hours, 3600.0)]
    fn duration_units_convert_to_seconds(#[case] unit: DurationUnit, #[case] seconds: f64) {
        assert_eq!(unit.base_unit_value(1.0), seconds);
    }

    #[rstest]
    #[case(VolumeUnit::Liters, 1.0)]
    #[case(VolumeUnit::Milliliters, 0.001)]
    #[case(VolumeUnit::CubicMeters, 1000.0)]
    #[case(VolumeUnit::CubicFeet, 28.316846592)]
    #[case(VolumeUnit::Megaliters, 1_000_000.0)]
    fn volume_units_convert_to_liters(#[case] unit: VolumeUnit, #[case] liters: f64) {
        assert_eq!(unit.base_unit_value(1.0), liters);
    }

    #[test]
    fn symbols_match_their_si_spellings() {
        assert_eq!(DurationUnit::Minutes.symbol(), "min");
        assert_eq!(VolumeUnit::CubicFeet.symbol(), "ft³");
        assert_eq!(MassUnit::Pounds.symbol(), "lb");
        assert_eq!(LengthUnit::Kilometers.symbol(), "km");
    }
}
