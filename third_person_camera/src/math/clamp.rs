/// Clamp `value` into the closed interval `[lo, hi]`
///
/// Unlike [`f32::clamp`] this never panics: inverted bounds (`lo > hi`)
/// resolve to `lo`. A NaN `value` passes through unchanged.
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi {
        return lo;
    }
    if value < lo {
        return lo;
    }
    if value > hi {
        return hi;
    }
    value
}

#[cfg(test)]
#[path = "clamp_tests.rs"]
mod tests;
