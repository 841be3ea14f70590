//! Low-precision solar orbital elements as functions of the Julian century T.
//!
//! Every quantity here is a pure function of T and can be evaluated on its own;
//! [`SolarOrbitalState`] bundles them for one instant.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{deg_to_rad, polynomial, rad_to_deg, wrap_above, wrap_below};

// ============================================================================
// Constants
// ============================================================================

/// Geometric mean longitude of the Sun, coefficients of T in degrees
const MEAN_LONGITUDE: [f64; 3] = [280.46646, 36000.76983, 0.0003032];

/// Geometric mean anomaly of the Sun, coefficients of T in degrees
const MEAN_ANOMALY: [f64; 3] = [357.52911, 35999.05029, -0.0001537];

/// Eccentricity of the Earth's orbit, coefficients of T
const ECCENTRICITY: [f64; 3] = [0.016708634, -0.000042037, -0.0000001267];

/// Amplitude of the first equation-of-center harmonic, coefficients of T in degrees
const CENTER_SIN_M: [f64; 3] = [1.914602, -0.004817, -0.000014];

/// Amplitude of the second equation-of-center harmonic, coefficients of T in degrees
const CENTER_SIN_2M: [f64; 2] = [0.019993, -0.000101];

/// Amplitude of the third equation-of-center harmonic in degrees
const CENTER_SIN_3M: f64 = 0.000289;

/// Arc-second part of the mean obliquity beyond 23°26', coefficients of T
const OBLIQUITY_SECONDS: [f64; 4] = [21.448, -46.8150, -0.00059, 0.001813];

/// Longitude of the Moon's ascending node, coefficients of T in degrees
const LUNAR_NODE: [f64; 2] = [125.04, -1934.136];

/// Nutation correction of the obliquity in degrees
const OBLIQUITY_NUTATION: f64 = 0.00256;

/// Aberration correction of the apparent longitude in degrees
const ABERRATION: f64 = 0.00569;

/// Nutation correction of the apparent longitude in degrees
const LONGITUDE_NUTATION: f64 = 0.00478;

/// Semi-major axis of the Earth's orbit in AU
const SEMI_MAJOR_AXIS_AU: f64 = 1.000001018;

// ============================================================================
// Orbital Elements
// ============================================================================

/// Calculates the geometric mean longitude of the Sun.
///
/// # Arguments
/// * `t` - Julian century since J2000.0
///
/// # Returns
/// Mean longitude in degrees, brought into `[0, 360]` by whole turns
pub fn geometric_mean_longitude(t: f64) -> f64 {
    let l0 = polynomial(&MEAN_LONGITUDE, t);
    wrap_below(wrap_above(l0, 360.0, 360.0), 0.0, 360.0)
}

/// Calculates the geometric mean anomaly of the Sun.
///
/// # Arguments
/// * `t` - Julian century since J2000.0
///
/// # Returns
/// Mean anomaly in degrees (not normalized)
pub fn geometric_mean_anomaly(t: f64) -> f64 {
    polynomial(&MEAN_ANOMALY, t)
}

/// Eccentricity of the Earth's orbit (unitless, about 0.0167).
pub fn eccentricity(t: f64) -> f64 {
    polynomial(&ECCENTRICITY, t)
}

/// Calculates the Sun's equation of center.
///
/// # Arguments
/// * `t` - Julian century since J2000.0
///
/// # Returns
/// Equation of center in degrees
pub fn equation_of_center(t: f64) -> f64 {
    let m = deg_to_rad(geometric_mean_anomaly(t));
    m.sin() * polynomial(&CENTER_SIN_M, t)
        + (2.0 * m).sin() * polynomial(&CENTER_SIN_2M, t)
        + (3.0 * m).sin() * CENTER_SIN_3M
}

/// True longitude of the Sun in degrees (mean longitude plus equation of center).
pub fn true_longitude(t: f64) -> f64 {
    geometric_mean_longitude(t) + equation_of_center(t)
}

/// True anomaly of the Sun in degrees (mean anomaly plus equation of center).
pub fn true_anomaly(t: f64) -> f64 {
    geometric_mean_anomaly(t) + equation_of_center(t)
}

/// Sun-Earth distance in AU.
pub fn radius_vector(t: f64) -> f64 {
    let e = eccentricity(t);
    let v = true_anomaly(t);
    (SEMI_MAJOR_AXIS_AU * (1.0 - e * e)) / (1.0 + e * deg_to_rad(v).cos())
}

/// Longitude of the ascending node of the Moon's orbit in degrees.
///
/// Drives the nutation terms of both the apparent longitude and the corrected
/// obliquity.
pub fn lunar_ascending_node(t: f64) -> f64 {
    polynomial(&LUNAR_NODE, t)
}

/// Apparent longitude of the Sun in degrees, corrected for aberration and nutation.
pub fn apparent_longitude(t: f64) -> f64 {
    let omega = lunar_ascending_node(t);
    true_longitude(t) - ABERRATION - LONGITUDE_NUTATION * deg_to_rad(omega).sin()
}

/// Calculates the mean obliquity of the ecliptic.
///
/// # Arguments
/// * `t` - Julian century since J2000.0
///
/// # Returns
/// Mean obliquity in degrees (23°26' plus a polynomial number of arc-seconds)
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = polynomial(&OBLIQUITY_SECONDS, t);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic in degrees, corrected for lunar nodal precession.
pub fn corrected_obliquity(t: f64) -> f64 {
    let omega = lunar_ascending_node(t);
    mean_obliquity(t) + OBLIQUITY_NUTATION * deg_to_rad(omega).cos()
}

// ============================================================================
// Derived Quantities
// ============================================================================

/// Difference between true and mean solar time, in minutes.
pub fn equation_of_time(t: f64) -> f64 {
    SolarOrbitalState::at(t).equation_of_time()
}

/// Solar declination in degrees.
pub fn declination(t: f64) -> f64 {
    SolarOrbitalState::at(t).declination()
}

/// Solar orbital elements at one instant.
///
/// All angles are in degrees. Built by [`SolarOrbitalState::at`]; each field is
/// the value of the free function of the same name.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarOrbitalState {
    /// Julian century the state was computed for
    pub julian_century: f64,
    /// Geometric mean longitude, `[0, 360]`
    pub mean_longitude: f64,
    /// Geometric mean anomaly
    pub mean_anomaly: f64,
    /// Orbital eccentricity (unitless)
    pub eccentricity: f64,
    /// Equation of center
    pub equation_of_center: f64,
    /// True longitude
    pub true_longitude: f64,
    /// True anomaly
    pub true_anomaly: f64,
    /// Apparent longitude
    pub apparent_longitude: f64,
    /// Mean obliquity of the ecliptic
    pub mean_obliquity: f64,
    /// Obliquity corrected for nutation
    pub corrected_obliquity: f64,
    /// Sun-Earth distance in AU
    pub radius_vector: f64,
}

impl SolarOrbitalState {
    pub fn at(t: f64) -> Self {
        let mean_longitude = geometric_mean_longitude(t);
        let mean_anomaly = geometric_mean_anomaly(t);
        let eccentricity = eccentricity(t);
        let equation_of_center = equation_of_center(t);
        let omega = deg_to_rad(lunar_ascending_node(t));
        let true_longitude = mean_longitude + equation_of_center;
        let true_anomaly = mean_anomaly + equation_of_center;
        let mean_obliquity = mean_obliquity(t);
        Self {
            julian_century: t,
            mean_longitude,
            mean_anomaly,
            eccentricity,
            equation_of_center,
            true_longitude,
            true_anomaly,
            apparent_longitude: true_longitude - ABERRATION - LONGITUDE_NUTATION * omega.sin(),
            mean_obliquity,
            corrected_obliquity: mean_obliquity + OBLIQUITY_NUTATION * omega.cos(),
            radius_vector: (SEMI_MAJOR_AXIS_AU * (1.0 - eccentricity * eccentricity))
                / (1.0 + eccentricity * deg_to_rad(true_anomaly).cos()),
        }
    }

    /// Equation of time in minutes.
    ///
    /// Five-term expansion in the mean longitude and mean anomaly, weighted by
    /// `y = tan²(ε/2)` of the corrected obliquity; the result in degrees is
    /// converted to minutes of time (×4).
    pub fn equation_of_time(&self) -> f64 {
        let mut y = (deg_to_rad(self.corrected_obliquity) / 2.0).tan();
        y *= y;

        let l0 = deg_to_rad(self.mean_longitude);
        let m = deg_to_rad(self.mean_anomaly);
        let e = self.eccentricity;

        let sin2l0 = (2.0 * l0).sin();
        let cos2l0 = (2.0 * l0).cos();
        let sin4l0 = (4.0 * l0).sin();
        let sinm = m.sin();
        let sin2m = (2.0 * m).sin();

        let etime = y * sin2l0 - 2.0 * e * sinm + 4.0 * e * y * sinm * cos2l0
            - 0.5 * y * y * sin4l0
            - 1.25 * e * e * sin2m;
        rad_to_deg(etime) * 4.0
    }

    /// Solar declination in degrees.
    ///
    /// `asin(sin ε · sin λ)`; the product of two sines needs no clamping.
    pub fn declination(&self) -> f64 {
        let sint = deg_to_rad(self.corrected_obliquity).sin() * deg_to_rad(self.apparent_longitude).sin();
        rad_to_deg(sint.asin())
    }
}
