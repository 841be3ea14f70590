//! Local horizontal coordinates from the solar orbital state and the observer.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::{debug, trace};

use crate::math::{clamp_unit, deg_to_rad, rad_to_deg, round_half_up_hundredths, wrap_above};
use crate::orbit::SolarOrbitalState;
use crate::refraction::refraction_correction;
use crate::time::{LocalInstant, MINUTES_PER_DAY};
use crate::types::{GeoCoordinate, SolarPosition};

/// Below this magnitude of `cos(lat)·sin(zenith)` the azimuth formula is not
/// evaluated and a fixed azimuth is used instead.
pub const AZIMUTH_DENOMINATOR_EPSILON: f64 = 0.001;

/// Correction from local clock time to true solar time, in minutes.
///
/// `eq_time + 4·longitude − 60·utc_offset`
pub fn solar_time_fix(equation_of_time: f64, longitude: f64, utc_offset_hours: f64) -> f64 {
    equation_of_time + 4.0 * longitude - 60.0 * utc_offset_hours
}

/// True solar time in minutes.
///
/// Whole days are removed only while the value exceeds 1440; a negative value
/// is left as is and folded later by [`hour_angle`].
pub fn true_solar_time(local_minutes: f64, time_fix: f64) -> f64 {
    wrap_above(local_minutes + time_fix, MINUTES_PER_DAY, MINUTES_PER_DAY)
}

/// Hour angle in degrees, `tst/4 − 180`, with one turn added below -180.
pub fn hour_angle(true_solar_time: f64) -> f64 {
    let ha = true_solar_time / 4.0 - 180.0;
    if ha < -180.0 {
        ha + 360.0
    } else {
        ha
    }
}

/// Calculates the solar zenith angle.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in degrees
/// * `hour_angle` - Local hour angle in degrees
///
/// # Returns
/// Zenith angle in degrees, `[0, 180]`. The cosine is clamped to `[-1, 1]`
/// before `acos`.
pub fn zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let decl = deg_to_rad(declination);
    let csz = lat.sin() * decl.sin() + lat.cos() * decl.cos() * deg_to_rad(hour_angle).cos();
    rad_to_deg(clamp_unit(csz).acos())
}

/// Calculates the solar azimuth.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in degrees
/// * `hour_angle` - Local hour angle in degrees
/// * `zenith` - Zenith angle in degrees
///
/// # Returns
/// Azimuth in degrees, measured from north. The result is negated when the hour
/// angle is positive (afternoon) and is not folded back into `[0, 360)`.
///
/// When `|cos(lat)·sin(zenith)|` is at most [`AZIMUTH_DENOMINATOR_EPSILON`]
/// (observer at a pole, or the Sun at the zenith or nadir) the azimuth is fixed
/// to 180 for positive latitudes and 0 otherwise.
pub fn azimuth(latitude: f64, declination: f64, hour_angle: f64, zenith: f64) -> f64 {
    let lat = deg_to_rad(latitude);
    let zen = deg_to_rad(zenith);
    let denominator = lat.cos() * zen.sin();

    if denominator.abs() > AZIMUTH_DENOMINATOR_EPSILON {
        let ratio = (lat.sin() * zen.cos() - deg_to_rad(declination).sin()) / denominator;
        let azimuth = 180.0 - rad_to_deg(clamp_unit(ratio).acos());
        if hour_angle > 0.0 {
            -azimuth
        } else {
            azimuth
        }
    } else {
        debug!("azimuth denominator {denominator:e} too small at latitude {latitude}, using fixed azimuth");
        if latitude > 0.0 {
            180.0
        } else {
            0.0
        }
    }
}

/// Every intermediate of one solar position calculation.
///
/// Angles are in degrees and times in minutes. Nothing here is rounded; use
/// [`SolarGeometry::position`] for the rounded output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarGeometry {
    pub orbit: SolarOrbitalState,
    pub equation_of_time: f64,
    pub declination: f64,
    pub true_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub azimuth: f64,
    /// Geometric elevation, `90 − zenith`
    pub geometric_elevation: f64,
    /// Refraction correction in degrees
    pub refraction: f64,
}

impl SolarGeometry {
    /// Runs the full calculation for an observer at a local instant.
    pub fn solve(coordinate: GeoCoordinate, instant: &LocalInstant) -> Self {
        let t = instant.julian_century();
        let orbit = SolarOrbitalState::at(t);
        let equation_of_time = orbit.equation_of_time();
        let declination = orbit.declination();
        trace!("T={t} eq_time={equation_of_time} declination={declination}");

        let fix = solar_time_fix(equation_of_time, coordinate.longitude, instant.utc_offset_hours());
        let true_solar_time = true_solar_time(instant.local_minutes(), fix);
        let hour_angle = hour_angle(true_solar_time);
        let zenith = zenith(coordinate.latitude, declination, hour_angle);
        let azimuth = azimuth(coordinate.latitude, declination, hour_angle, zenith);

        let geometric_elevation = 90.0 - zenith;
        let refraction = refraction_correction(geometric_elevation);
        trace!(
            "tst={true_solar_time} ha={hour_angle} zenith={zenith} azimuth={azimuth} refraction={refraction}"
        );

        Self {
            orbit,
            equation_of_time,
            declination,
            true_solar_time,
            hour_angle,
            zenith,
            azimuth,
            geometric_elevation,
            refraction,
        }
    }

    /// Zenith angle after refraction, in degrees.
    pub fn refracted_zenith(&self) -> f64 {
        self.zenith - self.refraction
    }

    /// Refraction-corrected elevation, unrounded.
    pub fn elevation(&self) -> f64 {
        90.0 - self.refracted_zenith()
    }

    /// Azimuth and elevation rounded to two decimals.
    pub fn position(&self) -> SolarPosition {
        SolarPosition {
            azimuth: round_half_up_hundredths(self.azimuth),
            elevation: round_half_up_hundredths(self.elevation()),
        }
    }
}
