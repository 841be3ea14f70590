//! Directional sun light driven by the solar position.
//!
//! Pure math only: the light is described by an intensity and a hinge rotation
//! applied to a position on the reference frame's north axis. Turning this into
//! a scene-graph node is left to the renderer.

use core::f64::consts::PI;

#[allow(unused_imports)]
use core_maths::CoreFloat;
use glam::{DQuat, DVec3};
use log::trace;

use crate::math::rad_to_deg;
use crate::time::LocalInstant;
use crate::types::{GeoCoordinate, SolarError, SolarPosition};
use crate::SolarPositionCalculator;

/// Elevation in degrees at which the light reaches full intensity.
pub const FADE_IN_THRESHOLD_DEGREES: f64 = 2.0;

/// Default distance of the light from the hinge.
pub const DEFAULT_SUN_DISTANCE: f64 = 1.0;

/// Light intensity for a solar elevation in degrees.
///
/// 0 at or below the horizon, a linear ramp up to
/// [`FADE_IN_THRESHOLD_DEGREES`], 1 above it.
///
/// # Example
///
/// ```
/// use solar_orientation::light_intensity;
///
/// assert_eq!(light_intensity(-3.0), 0.0);
/// assert_eq!(light_intensity(1.0), 0.5);
/// assert_eq!(light_intensity(45.0), 1.0);
/// ```
pub fn light_intensity(elevation_degrees: f64) -> f64 {
    if elevation_degrees <= 0.0 {
        0.0
    } else if elevation_degrees <= FADE_IN_THRESHOLD_DEGREES {
        elevation_degrees / FADE_IN_THRESHOLD_DEGREES
    } else {
        1.0
    }
}

/// Local axes of the scene the light lives in.
///
/// All three axes are unit vectors. They are not required to be orthogonal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceFrame {
    north: DVec3,
    east: DVec3,
    nadir: DVec3,
}

impl ReferenceFrame {
    /// Builds a frame from three axis directions, normalizing each.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::DegenerateAxis`] if an axis has zero, infinite or
    /// NaN length.
    ///
    /// # Example
    ///
    /// ```
    /// use glam::DVec3;
    /// use solar_orientation::ReferenceFrame;
    ///
    /// // y up, north along -z
    /// let frame = ReferenceFrame::new(DVec3::NEG_Z, DVec3::X * 2.0, DVec3::NEG_Y).unwrap();
    /// assert_eq!(frame.east(), DVec3::X);
    /// ```
    pub fn new(north: DVec3, east: DVec3, nadir: DVec3) -> Result<Self, SolarError> {
        Ok(Self {
            north: north.try_normalize().ok_or(SolarError::DegenerateAxis)?,
            east: east.try_normalize().ok_or(SolarError::DegenerateAxis)?,
            nadir: nadir.try_normalize().ok_or(SolarError::DegenerateAxis)?,
        })
    }

    /// Right-handed y-up frame with north along -z and east along +x.
    pub const Y_UP: Self = Self {
        north: DVec3::NEG_Z,
        east: DVec3::X,
        nadir: DVec3::NEG_Y,
    };

    pub fn north(&self) -> DVec3 {
        self.north
    }

    pub fn east(&self) -> DVec3 {
        self.east
    }

    pub fn nadir(&self) -> DVec3 {
        self.nadir
    }
}

/// Position and hinge rotation of the light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightOrientation {
    /// Unrotated light position, `north · sun_distance`
    pub position: DVec3,
    /// Rotation applied to `position`: elevation about east first, then
    /// azimuth about nadir
    pub hinge: DQuat,
}

impl LightOrientation {
    /// Builds the orientation for angles in radians.
    pub fn from_angles(frame: &ReferenceFrame, sun_distance: f64, azimuth: f64, elevation: f64) -> Self {
        // each rotation is pre-multiplied onto the identity, so elevation acts first
        let mut hinge = DQuat::IDENTITY;
        hinge = DQuat::from_axis_angle(frame.east, elevation) * hinge;
        hinge = DQuat::from_axis_angle(frame.nadir, azimuth) * hinge;
        Self {
            position: frame.north * sun_distance,
            hinge,
        }
    }

    /// Light position after the hinge rotation.
    pub fn direction(&self) -> DVec3 {
        self.hinge * self.position
    }
}

/// Light parameters for one solar position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Intensity in `[0, 1]`
    pub intensity: f64,
    /// `None` while the Sun is at or below the horizon; the previous
    /// orientation should be kept in that case
    pub orientation: Option<LightOrientation>,
}

/// A sun light attached to a location.
///
/// Holds the latest solar azimuth and elevation in radians. Both start at 0
/// until [`SunLight::update_orientation`] is called.
///
/// # Example
///
/// ```
/// use solar_orientation::{GeoCoordinate, LocalInstant, ReferenceFrame, SunLight};
///
/// let mut light = SunLight::new(GeoCoordinate::new(46.941836, 7.440082), ReferenceFrame::Y_UP);
/// light.update_orientation(&LocalInstant::new(2024, 6, 21, 13, 30, 0, 2.0).unwrap());
///
/// let directional = light.directional_light();
/// assert_eq!(directional.intensity, 1.0);
/// // midday sun is above the horizon plane
/// assert!(directional.orientation.unwrap().direction().y > 0.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunLight {
    coordinate: GeoCoordinate,
    frame: ReferenceFrame,
    sun_distance: f64,
    azimuth: f64,
    elevation: f64,
    instant: Option<LocalInstant>,
}

impl SunLight {
    /// Creates a light at [`DEFAULT_SUN_DISTANCE`].
    pub fn new(coordinate: GeoCoordinate, frame: ReferenceFrame) -> Self {
        Self::with_distance(coordinate, frame, DEFAULT_SUN_DISTANCE)
    }

    pub fn with_distance(coordinate: GeoCoordinate, frame: ReferenceFrame, sun_distance: f64) -> Self {
        Self {
            coordinate,
            frame,
            sun_distance,
            azimuth: 0.0,
            elevation: 0.0,
            instant: None,
        }
    }

    /// Recomputes the solar angles for `instant`.
    pub fn update_orientation(&mut self, instant: &LocalInstant) {
        let position = SolarPositionCalculator::new().position(self.coordinate, instant);
        self.set_position(position);
        self.instant = Some(*instant);
    }

    /// Recomputes the solar angles for the current system time.
    #[cfg(feature = "std")]
    pub fn update_orientation_now(&mut self) {
        self.update_orientation(&LocalInstant::now());
    }

    fn set_position(&mut self, position: SolarPosition) {
        self.azimuth = reduced_radians(position.azimuth);
        self.elevation = reduced_radians(position.elevation);
        trace!("sun light azimuth={} elevation={} rad", self.azimuth, self.elevation);
    }

    /// Latest azimuth in radians.
    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Latest elevation in radians.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Instant of the last update, if any.
    pub fn instant(&self) -> Option<LocalInstant> {
        self.instant
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    pub fn sun_distance(&self) -> f64 {
        self.sun_distance
    }

    /// Intensity and orientation for the latest solar angles.
    pub fn directional_light(&self) -> DirectionalLight {
        let intensity = light_intensity(rad_to_deg(self.elevation));
        let orientation = (intensity > 0.0).then(|| {
            LightOrientation::from_angles(&self.frame, self.sun_distance, self.azimuth, self.elevation)
        });
        DirectionalLight { intensity, orientation }
    }
}

/// `(degrees % 360)` in radians, keeping the sign of the input.
fn reduced_radians(degrees: f64) -> f64 {
    (degrees % 360.0) * PI / 180.0
}
