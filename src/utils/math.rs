use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values without clamping the factor.
///
/// Written as a weighted sum so that factors of exactly 0 and 1 return the
/// endpoints bit-for-bit.
#[inline]
pub fn lerp_unclamped(start: f64, end: f64, factor: f64) -> f64 {
    start * (1.0 - factor) + end * factor
}

/// Simpson's rule over a single interval `[a, b]`.
///
/// Exact for polynomials up to cubic order, which covers every integrand built
/// from piecewise-linear station data (chord, chord², leading-edge coordinates).
/// The integrand is fallible so interpolation errors propagate to the caller.
pub fn simpson<E, F>(a: f64, b: f64, mut f: F) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let mid = 0.5 * (a + b);
    Ok((b - a) / 6.0 * (f(a)? + 4.0 * f(mid)? + f(b)?))
}
