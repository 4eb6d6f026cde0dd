/// Clamp a wide integer into a channel value.
#[inline]
pub(crate) fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

/// Round toward zero, then clamp into a channel value.
#[inline]
pub(crate) fn truncate_channel(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    clamp_channel(v.trunc() as i64)
}

/// Linear interpolation `a + (b - a) * t`.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
