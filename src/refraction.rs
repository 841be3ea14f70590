//! Atmospheric refraction correction as a function of the geometric elevation.
//!
//! The model is piecewise in four bands. It is not continuous at the band
//! boundaries; the jumps are small (below 0.01° at 5° and -0.575°).

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{deg_to_rad, polynomial};

/// Above this geometric elevation (degrees) refraction is ignored.
pub const NEGLIGIBLE_ABOVE: f64 = 85.0;

/// Lower bound (degrees) of the band using the tangent series.
pub const TANGENT_SERIES_ABOVE: f64 = 5.0;

/// Lower bound (degrees) of the band using the near-horizon polynomial.
pub const HORIZON_POLYNOMIAL_ABOVE: f64 = -0.575;

/// Near-horizon polynomial in the elevation, arc-seconds.
const HORIZON_POLYNOMIAL: [f64; 5] = [1735.0, -518.2, 103.4, -12.79, 0.711];

/// Refraction correction in arc-seconds.
///
/// # Arguments
/// * `elevation` - Geometric (unrefracted) solar elevation in degrees
///
/// # Returns
/// The amount the Sun appears raised, in arc-seconds:
/// * `0` above 85°
/// * `58.1/tan e − 0.07/tan³ e + 0.000086/tan⁵ e` above 5°
/// * `1735 − 518.2e + 103.4e² − 12.79e³ + 0.711e⁴` above -0.575°
/// * `−20.774/tan e` otherwise
pub fn refraction_correction_arcseconds(elevation: f64) -> f64 {
    if elevation > NEGLIGIBLE_ABOVE {
        return 0.0;
    }

    let te = deg_to_rad(elevation).tan();
    if elevation > TANGENT_SERIES_ABOVE {
        58.1 / te - 0.07 / te.powf(3.0) + 0.000086 / te.powf(5.0)
    } else if elevation > HORIZON_POLYNOMIAL_ABOVE {
        polynomial(&HORIZON_POLYNOMIAL, elevation)
    } else {
        -20.774 / te
    }
}

/// Refraction correction in degrees, see [`refraction_correction_arcseconds`].
pub fn refraction_correction(elevation: f64) -> f64 {
    refraction_correction_arcseconds(elevation) / 3600.0
}
