//! Continuity tests for the solar position.
//!
//! The elevation must change smoothly from one minute to the next, across
//! local midnight and month ends included. Instants are built from Unix
//! timestamps so every local date is a real calendar date.

extern crate std;
use crate::{GeoCoordinate, LocalInstant, SolarPositionCalculator};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use proptest::prelude::*;

/// Upper bound of the geometric elevation rate in degrees per minute (Earth's
/// rotation is 0.25°/min).
const MAX_GEOMETRIC_STEP: f64 = 0.26;

/// Refraction below -0.575° nearly doubles the apparent rate.
const MAX_REFRACTED_STEP: f64 = 0.5;

proptest! {
    #[allow(clippy::unwrap_used)]
    #[test]
    fn elevation_changes_smoothly_between_consecutive_minutes(
        timestamp in -2_000_000_000i64..=4_000_000_000i64,
        latitude in -89.0f64..=89.0,
        longitude in -180.0f64..=180.0,
        offset_quarters in -48i32..=56,
    ) {
        let utc_offset_hours = f64::from(offset_quarters) / 4.0;
        let coordinate = GeoCoordinate::new(latitude, longitude);
        let calculator = SolarPositionCalculator::new();

        let mut previous = calculator.geometry(
            coordinate,
            &LocalInstant::from_timestamp(timestamp, utc_offset_hours).unwrap(),
        );
        for minute in 1..=30 {
            let local = LocalInstant::from_timestamp(timestamp + 60 * minute, utc_offset_hours).unwrap();
            let current = calculator.geometry(coordinate, &local);

            let geometric_step = (current.geometric_elevation - previous.geometric_elevation).abs();
            prop_assert!(geometric_step < MAX_GEOMETRIC_STEP, "{:?} -> {:?}", previous, current);

            let refracted_step = (current.elevation() - previous.elevation()).abs();
            prop_assert!(refracted_step < MAX_REFRACTED_STEP, "{:?} -> {:?}", previous, current);

            previous = current;
        }
    }

    #[allow(clippy::unwrap_used)]
    #[test]
    fn julian_century_advances_by_one_minute(
        timestamp in -2_000_000_000i64..=4_000_000_000i64,
        offset_quarters in -48i32..=56,
    ) {
        let utc_offset_hours = f64::from(offset_quarters) / 4.0;
        let minute_in_centuries = 1.0 / (1440.0 * 36_525.0);

        let before = LocalInstant::from_timestamp(timestamp, utc_offset_hours).unwrap();
        let after = LocalInstant::from_timestamp(timestamp + 60, utc_offset_hours).unwrap();
        let step = after.julian_century() - before.julian_century();
        prop_assert!((step - minute_in_centuries).abs() < 1e-12, "{}", step);
    }
}

#[test]
fn midnight_rollover_is_continuous() {
    let calculator = SolarPositionCalculator::new();
    let bern = GeoCoordinate::new(46.941836, 7.440082);
    let before = LocalInstant::new(2024, 2, 29, 23, 59, 0, 1.0).unwrap();
    let after = LocalInstant::new(2024, 3, 1, 0, 0, 0, 1.0).unwrap();

    let step = calculator.geometry(bern, &after).elevation() - calculator.geometry(bern, &before).elevation();
    assert!(step.abs() < MAX_GEOMETRIC_STEP, "{step}");
}

#[test]
fn true_solar_time_wrap_keeps_the_hour_angle_continuous() {
    // on the antimeridian at UTC+0, true solar time passes a full day shortly before noon
    let calculator = SolarPositionCalculator::new();
    let coordinate = GeoCoordinate::new(-10.0, 180.0);
    let mut previous = calculator.geometry(coordinate, &LocalInstant::new(2024, 5, 10, 11, 0, 0, 0.0).unwrap());
    let mut wrapped = false;
    for minute in 1..=120 {
        let local = LocalInstant::new(2024, 5, 10, 11 + minute / 60, minute % 60, 0, 0.0).unwrap();
        let current = calculator.geometry(coordinate, &local);
        wrapped |= current.true_solar_time < previous.true_solar_time;
        assert!((current.zenith - previous.zenith).abs() < MAX_GEOMETRIC_STEP);
        previous = current;
    }
    assert!(wrapped);
}
