use thiserror::Error;

/// A point on the Earth's surface.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]` (positive
/// east). Values are not validated; out-of-range input yields a physically
/// meaningless but finite result.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoCoordinate {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Apparent position of the Sun in the local horizontal system.
///
/// Both angles are in degrees and rounded to two decimals with
/// [`round_half_up_hundredths`](crate::round_half_up_hundredths).
///
/// # Fields
///
/// - `azimuth`: measured from north through east in the morning. Afternoon
///   values are negated and are *not* folded back into `[0, 360)`, so the
///   observable range is `[-180, 180]`.
/// - `elevation`: refraction-corrected elevation above the horizon, `[-90, 90]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPosition {
    /// Azimuth in degrees
    pub azimuth: f64,
    /// Elevation in degrees (0 = horizon, 90 = zenith)
    pub elevation: f64,
}

impl SolarPosition {
    /// Returns true if the refracted Sun is above the horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.elevation > 0.0
    }
}

/// Errors raised while building inputs for the calculator.
///
/// The calculation itself never fails; these only come from constructors that
/// validate calendar fields or reference-frame axes.
///
/// # Variants
///
/// - `MonthOutOfRange`: month must be in 1..=12
/// - `DayOutOfRange`: day must be in 1..=31 (days past the month's end are clamped later)
/// - `TimeOfDayOutOfRange`: hour in 0..=23, minute in 0..=59, second in 0..=59
/// - `UtcOffsetOutOfRange`: offset must be finite and strictly within ±24 hours
/// - `DegenerateAxis`: a light reference-frame axis has zero or non-finite length
/// - `TimeConversionError`: a date/time value could not be represented
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolarError {
    #[error("Month out of range")]
    MonthOutOfRange,

    #[error("Day of month out of range")]
    DayOutOfRange,

    #[error("Time of day out of range")]
    TimeOfDayOutOfRange,

    #[error("UTC offset out of range")]
    UtcOffsetOutOfRange,

    #[error("Reference frame axis is degenerate")]
    DegenerateAxis,

    #[error("Time conversion error")]
    TimeConversionError,
}
