#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]
extern crate std;

#[allow(unused_imports)]
use core_maths::CoreFloat;
use proptest::prelude::*;

use crate::*;

mod continuity_tests;

const BERN: GeoCoordinate = GeoCoordinate::new(46.941836, 7.440082);

fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32, utc_offset_hours: f64) -> LocalInstant {
    LocalInstant::new(year, month, day, hour, minute, 0, utc_offset_hours).unwrap()
}

/// Highest rounded elevation over a local day, sampled every minute.
fn daily_maximum(coordinate: GeoCoordinate, year: i32, month: u32, day: u32, utc_offset_hours: f64) -> f64 {
    (0..24 * 60)
        .map(|minute| {
            let local = LocalInstant::new(year, month, day, minute / 60, minute % 60, 0, utc_offset_hours).unwrap();
            compute_solar_position(coordinate, &local).elevation
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn bern_june_solstice_noon_is_near_the_yearly_maximum() {
    let expected = 90.0 - (BERN.latitude - 23.44);
    let position = compute_solar_position(BERN, &instant(2024, 6, 21, 12, 0, 1.0));
    assert!((position.elevation - expected).abs() < 3.0, "{position:?}");
    assert!(position.azimuth > 150.0 && position.azimuth < 180.0, "{position:?}");

    let maximum = daily_maximum(BERN, 2024, 6, 21, 1.0);
    assert!((maximum - expected).abs() < 0.1, "{maximum}");
}

#[test]
fn bern_december_solstice_noon_is_near_the_yearly_minimum() {
    let expected = 90.0 - (BERN.latitude + 23.44);
    let position = compute_solar_position(BERN, &instant(2024, 12, 21, 12, 0, 1.0));
    assert!((position.elevation - expected).abs() < 3.0, "{position:?}");

    let maximum = daily_maximum(BERN, 2024, 12, 21, 1.0);
    assert!((maximum - expected).abs() < 0.2, "{maximum}");
}

#[test]
fn bern_afternoon_azimuth_is_negative() {
    let morning = compute_solar_position(BERN, &instant(2024, 9, 1, 10, 0, 2.0));
    let afternoon = compute_solar_position(BERN, &instant(2024, 9, 1, 16, 0, 2.0));
    assert!(morning.azimuth > 90.0 && morning.azimuth < 180.0, "{morning:?}");
    assert!(afternoon.azimuth < -90.0 && afternoon.azimuth > -180.0, "{afternoon:?}");
    assert!(morning.is_above_horizon() && afternoon.is_above_horizon());
}

#[test]
fn north_pole_uses_the_fixed_azimuth_all_year() {
    let pole = GeoCoordinate::new(90.0, 0.0);
    for month in 1..=12 {
        for hour in [0, 6, 12, 18] {
            let local = instant(2024, month, 15, hour, 0, 0.0);
            let geometry = SolarPositionCalculator::new().geometry(pole, &local);
            assert_eq!(geometry.position().azimuth, 180.0);
            // at the pole the geometric elevation is the declination
            assert!(
                (geometry.geometric_elevation - geometry.declination).abs() < 1e-6,
                "{geometry:?}"
            );
        }
    }
}

#[test]
fn south_pole_uses_the_zero_azimuth() {
    let pole = GeoCoordinate::new(-90.0, 0.0);
    let geometry = SolarPositionCalculator::new().geometry(pole, &instant(2024, 12, 21, 12, 0, 0.0));
    assert_eq!(geometry.azimuth, 0.0);
    assert!((geometry.geometric_elevation + geometry.declination).abs() < 1e-6);
    assert!(geometry.position().elevation > 23.0);
}

#[test]
fn february_thirtieth_matches_the_last_day_of_february() {
    assert_eq!(
        compute_solar_position(BERN, &instant(2024, 2, 30, 9, 15, 1.0)),
        compute_solar_position(BERN, &instant(2024, 2, 29, 9, 15, 1.0))
    );
    assert_eq!(
        compute_solar_position(BERN, &instant(2023, 2, 30, 9, 15, 1.0)),
        compute_solar_position(BERN, &instant(2023, 2, 28, 9, 15, 1.0))
    );
}

#[test]
fn outputs_are_rounded_to_hundredths() {
    let position = compute_solar_position(BERN, &instant(2024, 4, 2, 8, 17, 2.0));
    for value in [position.azimuth, position.elevation] {
        let scaled = value * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "{value}");
    }
}

#[test]
fn nan_input_propagates_without_panicking() {
    let position = compute_solar_position(GeoCoordinate::new(f64::NAN, 7.0), &instant(2024, 6, 21, 12, 0, 1.0));
    assert!(position.elevation.is_nan());
    let position = compute_solar_position(GeoCoordinate::new(46.0, f64::NAN), &instant(2024, 6, 21, 12, 0, 1.0));
    assert!(position.elevation.is_nan());
}

#[test]
fn calculator_and_free_function_agree() {
    let local = instant(2031, 11, 3, 15, 42, -3.0);
    let coordinate = GeoCoordinate::new(-22.9068, -43.1729);
    assert_eq!(
        SolarPositionCalculator::new().position(coordinate, &local),
        compute_solar_position(coordinate, &local)
    );
}

#[cfg(feature = "std")]
#[test]
fn now_helpers_return_finite_positions() {
    let position = compute_solar_position_now(BERN);
    assert!(position.azimuth.is_finite() && position.elevation.is_finite());
    let mut light = SunLight::new(BERN, ReferenceFrame::Y_UP);
    light.update_orientation_now();
    assert!(light.instant().is_some());
}

fn arb_instant() -> impl Strategy<Value = LocalInstant> {
    (
        1901i32..=2099,
        1u32..=12,
        1u32..=31,
        0u32..=23,
        0u32..=59,
        0u32..=59,
        -12.0f64..=14.0,
    )
        .prop_map(|(year, month, day, hour, minute, second, offset)| {
            LocalInstant::new(year, month, day, hour, minute, second, offset).unwrap()
        })
}

proptest! {
    #[test]
    fn positions_stay_within_bounds(
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
        local in arb_instant(),
    ) {
        let position = compute_solar_position(GeoCoordinate::new(latitude, longitude), &local);
        prop_assert!((-90.0..=90.0).contains(&position.elevation), "{:?}", position);
        prop_assert!((-180.0..=180.0).contains(&position.azimuth), "{:?}", position);
    }

    #[test]
    fn calculation_is_deterministic(
        latitude in -90.0f64..=90.0,
        longitude in -180.0f64..=180.0,
        local in arb_instant(),
    ) {
        let coordinate = GeoCoordinate::new(latitude, longitude);
        let first = compute_solar_position(coordinate, &local);
        let second = compute_solar_position(coordinate, &local);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn declination_stays_within_the_obliquity(local in arb_instant()) {
        let geometry = SolarPositionCalculator::new().geometry(BERN, &local);
        prop_assert!(geometry.declination.abs() <= geometry.orbit.corrected_obliquity + 1e-9);
        prop_assert!((0.0..=180.0).contains(&geometry.zenith));
        prop_assert!((-180.0..=180.0).contains(&geometry.hour_angle));
    }

    #[test]
    fn intensity_follows_the_elevation(
        latitude in -89.0f64..=89.0,
        longitude in -180.0f64..=180.0,
        local in arb_instant(),
    ) {
        let mut light = SunLight::new(GeoCoordinate::new(latitude, longitude), ReferenceFrame::Y_UP);
        light.update_orientation(&local);
        let directional = light.directional_light();
        let elevation = compute_solar_position(light.coordinate(), &local).elevation;
        prop_assert!((0.0..=1.0).contains(&directional.intensity));
        prop_assert_eq!(directional.orientation.is_some(), elevation > 0.0);
    }
}
