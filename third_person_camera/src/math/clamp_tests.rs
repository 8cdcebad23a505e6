use super::*;

// ============================================================================
// Range
// ============================================================================

#[test]
fn test_clamp_inside_range_is_identity() {
    assert_eq!(clamp(3.0, 1.25, 10.0), 3.0);
}

#[test]
fn test_clamp_below_and_above() {
    assert_eq!(clamp(-4.0, 1.25, 10.0), 1.25);
    assert_eq!(clamp(104.0, 1.25, 10.0), 10.0);
}

#[test]
fn test_clamp_bounds_are_reachable() {
    assert_eq!(clamp(1.25, 1.25, 10.0), 1.25);
    assert_eq!(clamp(10.0, 1.25, 10.0), 10.0);
}

#[test]
fn test_clamp_degenerate_interval() {
    assert_eq!(clamp(0.0, 2.0, 2.0), 2.0);
    assert_eq!(clamp(5.0, 2.0, 2.0), 2.0);
}

#[test]
fn test_clamp_inverted_bounds_yield_lower() {
    assert_eq!(clamp(0.0, 5.0, 1.0), 5.0);
    assert_eq!(clamp(3.0, 5.0, 1.0), 5.0);
    assert_eq!(clamp(9.0, 5.0, 1.0), 5.0);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_clamp_result_in_range_and_idempotent() {
    let (lo, hi) = (-1.5_f32, 2.5_f32);
    let mut value = -10.0_f32;
    while value <= 10.0 {
        let once = clamp(value, lo, hi);
        assert!(once >= lo && once <= hi, "clamp({}) = {}", value, once);
        assert_eq!(clamp(once, lo, hi), once);
        value += 0.37;
    }
}

#[test]
fn test_clamp_infinities() {
    assert_eq!(clamp(f32::INFINITY, 0.0, 1.0), 1.0);
    assert_eq!(clamp(f32::NEG_INFINITY, 0.0, 1.0), 0.0);
}
