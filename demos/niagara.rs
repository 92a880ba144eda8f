//! How much water goes over Niagara Falls in a day?

use rate_core::units::{DurationUnit, VolumeUnit};
use rate_core::{Measurement, Rate};

fn main() {
    let falls_flow = Rate::new(84_760.0, VolumeUnit::CubicFeet, DurationUnit::Seconds);
    let one_day = Measurement::new(24.0, DurationUnit::Hours);

    let discharged = (falls_flow * one_day).converted(VolumeUnit::Megaliters);
    println!("{} over {} discharges {}", falls_flow, one_day, discharged);
}
