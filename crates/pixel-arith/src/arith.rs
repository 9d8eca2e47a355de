//! Scalar pixel arithmetic.
//!
//! Error diffusion adds a signed error term to an 8-bit pixel. A naive
//! `u8` addition wraps before any range check can see the overflow, so the
//! sum is formed in `i32` (saturating) and only then narrowed back to `u8`.

/// Largest representable pixel value.
pub const PIXEL_MAX: u8 = u8::MAX;

/// Add a signed error term to a pixel, clamping the result to `0..=255`.
///
/// - `base + error <= 0` gives `0`
/// - `base + error >= 255` gives `255`
/// - anything in between is returned exactly
///
/// Total over its whole input domain, including `i32::MIN` and `i32::MAX`.
///
/// ```
/// use pixel_arith::saturating_add;
///
/// assert_eq!(saturating_add(100, 50), 150);
/// assert_eq!(saturating_add(200, 100), 255);
/// assert_eq!(saturating_add(10, -50), 0);
/// ```
#[inline]
pub fn saturating_add(base: u8, error: i32) -> u8 {
    let sum = i32::from(base).saturating_add(error);
    sum.clamp(0, i32::from(PIXEL_MAX)) as u8
}

/// Add the same error term to every pixel in `pixels`.
///
/// This is the per-neighbour update step of error diffusion; the kernel and
/// traversal order belong to the caller.
pub fn apply_error(pixels: &mut [u8], error: i32) {
    if error == 0 {
        return;
    }
    for pixel in pixels.iter_mut() {
        *pixel = saturating_add(*pixel, error);
    }
}

/// Return the smaller of two values.
///
/// Returns `a` when `a < b`, otherwise `b`. For totally ordered inputs this is
/// the usual minimum; the result is always one of the two arguments.
///
/// ```
/// use pixel_arith::min;
///
/// assert_eq!(min(5, 9), 5);
/// assert_eq!(min(9, 5), 5);
/// assert_eq!(min(7, 7), 7);
/// ```
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}
