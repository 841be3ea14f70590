//! # Solar Orientation
//!
//! Apparent position of the Sun (azimuth and elevation) for a place on Earth and
//! a local clock time, using the NOAA low-precision solar position algorithm.
//!
//! The calculation works from a calendar date, a local time of day and a fixed
//! offset from UTC. No timezone database or daylight-saving rule is consulted:
//! the caller supplies the offset that applies at that moment. Results are in
//! degrees and rounded to two decimals.
//!
//! A [`SunLight`] turns the position into a directional light (intensity plus a
//! hinge rotation) for a renderer.
//!
//! ## Basic Usage
//!
//! ```
//! use solar_orientation::{compute_solar_position, GeoCoordinate, LocalInstant};
//!
//! // Bern, Switzerland at 13:30 CEST on the June solstice
//! let bern = GeoCoordinate::new(46.941836, 7.440082);
//! let instant = LocalInstant::new(2024, 6, 21, 13, 30, 0, 2.0).unwrap();
//!
//! let position = compute_solar_position(bern, &instant);
//! println!("Azimuth: {:.2}°", position.azimuth);
//! println!("Elevation: {:.2}°", position.elevation);
//!
//! // close to the yearly maximum of 90 - (46.94 - 23.44)
//! assert!((position.elevation - 66.5).abs() < 1.0);
//! ```
//!
//! ## Azimuth convention
//!
//! Morning azimuths are measured from north through east and lie in
//! `[0, 180]`. Afternoon azimuths are negated instead of being folded into
//! `[180, 360)`, so south-west is reported as `-135`.
//!
//! ## Features
//!
//! - `std` (default): [`LocalInstant::now`] and the `*_now` helpers.
//! - `serde`: `Serialize`/`Deserialize` for the value types.
//!
//! Without `std` the crate is `no_std`; floating point functions come from
//! `core_maths`.
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod horizon;
pub mod light;
mod math;
pub mod orbit;
pub mod refraction;
pub mod time;
mod types;

#[cfg(test)]
mod tests;

pub use horizon::SolarGeometry;
pub use light::{light_intensity, DirectionalLight, LightOrientation, ReferenceFrame, SunLight};
pub use math::round_half_up_hundredths;
pub use orbit::SolarOrbitalState;
pub use time::{julian_day, LocalInstant};
pub use types::{GeoCoordinate, SolarError, SolarPosition};

/// Calculator for the apparent solar position.
///
/// Holds no state; every call is independent and safe to make from any thread.
///
/// # Example
///
/// ```
/// use solar_orientation::{GeoCoordinate, LocalInstant, SolarPositionCalculator};
///
/// let calculator = SolarPositionCalculator::new();
/// let north_pole = GeoCoordinate::new(90.0, 0.0);
/// let instant = LocalInstant::new(2024, 3, 1, 0, 0, 0, 0.0).unwrap();
///
/// // fixed azimuth branch at the pole
/// assert_eq!(calculator.position(north_pole, &instant).azimuth, 180.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolarPositionCalculator;

impl SolarPositionCalculator {
    pub fn new() -> Self {
        Self
    }

    /// All unrounded intermediates of the calculation.
    pub fn geometry(&self, coordinate: GeoCoordinate, instant: &LocalInstant) -> SolarGeometry {
        SolarGeometry::solve(coordinate, instant)
    }

    /// Calculates the solar position for an observer at a local instant.
    ///
    /// # Arguments
    /// * `coordinate` - Observer latitude and longitude in degrees
    /// * `instant` - Local date, clock time and UTC offset
    ///
    /// # Returns
    /// Azimuth and refraction-corrected elevation in degrees, rounded to two
    /// decimals. Never fails; NaN input propagates to NaN output.
    pub fn position(&self, coordinate: GeoCoordinate, instant: &LocalInstant) -> SolarPosition {
        self.geometry(coordinate, instant).position()
    }

    /// Solar position for the current system time and offset.
    #[cfg(feature = "std")]
    pub fn position_now(&self, coordinate: GeoCoordinate) -> SolarPosition {
        self.position(coordinate, &LocalInstant::now())
    }
}

/// Calculates the solar position, see [`SolarPositionCalculator::position`].
pub fn compute_solar_position(coordinate: GeoCoordinate, instant: &LocalInstant) -> SolarPosition {
    SolarPositionCalculator::new().position(coordinate, instant)
}

/// Calculates the solar position at the moment of the call.
///
/// The system clock and local UTC offset are read on every call.
#[cfg(feature = "std")]
pub fn compute_solar_position_now(coordinate: GeoCoordinate) -> SolarPosition {
    SolarPositionCalculator::new().position_now(coordinate)
}
