use core::f64::consts::PI;

#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Repetitions above which [`wrap_above`] and [`wrap_below`] pre-reduce with `%`
/// instead of stepping one period at a time.
const MAX_WRAP_STEPS: f64 = 1.0e6;

/// Converts degrees to radians as `π·deg/180`.
///
/// The multiplication order is kept instead of using [`f64::to_radians`], which
/// multiplies by a pre-rounded `π/180` and can differ in the last bit.
pub(crate) fn deg_to_rad(degrees: f64) -> f64 {
    (PI * degrees) / 180.0
}

/// Converts radians to degrees as `180·rad/π`.
pub(crate) fn rad_to_deg(radians: f64) -> f64 {
    (180.0 * radians) / PI
}

/// Clamps a cosine or sine argument into `[-1, 1]` before an inverse trig call.
///
/// NaN passes through unchanged.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Evaluates a polynomial with Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
///
/// Each step is a separate multiply and add (no fused multiply-add), so the result
/// is bit-identical to the nested form `a₀ + x(a₁ + x(a₂ + ...))`.
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

/// Subtracts `period` while `value` is strictly greater than `limit`.
///
/// A value equal to `limit` is left alone. Non-finite values are returned unchanged.
pub(crate) fn wrap_above(value: f64, limit: f64, period: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let mut wrapped = value;
    if (wrapped - limit) / period > MAX_WRAP_STEPS {
        wrapped = limit + (wrapped - limit) % period;
    }
    while wrapped > limit {
        wrapped -= period;
    }
    wrapped
}

/// Adds `period` while `value` is strictly less than `limit`.
///
/// Non-finite values are returned unchanged.
pub(crate) fn wrap_below(value: f64, limit: f64, period: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let mut wrapped = value;
    if (limit - wrapped) / period > MAX_WRAP_STEPS {
        wrapped = limit - (limit - wrapped) % period;
    }
    while wrapped < limit {
        wrapped += period;
    }
    wrapped
}

/// Rounds to two decimals as `floor(x·100 + 0.5) / 100`.
///
/// Ties go towards positive infinity, so the rule is asymmetric around zero:
/// `12.345 → 12.35` but `-12.345 → -12.34`.
pub fn round_half_up_hundredths(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
