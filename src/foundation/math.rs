/// Plain linear interpolation. `t` is used as given; callers clamp first.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp to [0, 1], mapping NaN to 0.
///
/// Upstream scroll measurements can glitch (NaN, out of range); bad input
/// collapses to the nearest authored value instead of propagating.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
