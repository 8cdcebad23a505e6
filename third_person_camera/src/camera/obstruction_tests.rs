use glam::Vec3;
use super::*;

// ============================================================================
// ViewBlockingMask
// ============================================================================

#[test]
fn test_mask_default_is_all_low_layers() {
    let mask = ViewBlockingMask::default();
    assert_eq!(mask, ViewBlockingMask::ALL);
    assert_eq!(mask.0, 2147483647);
    assert!(mask.contains_layer(0));
    assert!(mask.contains_layer(30));
    assert!(!mask.contains_layer(31));
}

#[test]
fn test_mask_from_layers() {
    let mask = ViewBlockingMask::from_layers(&[0, 3, 63, 64, 200]);
    assert!(mask.contains_layer(0));
    assert!(mask.contains_layer(3));
    assert!(mask.contains_layer(63));
    assert!(!mask.contains_layer(1));
    assert!(!mask.contains_layer(64));
    assert_eq!(mask.0 & 0b1111, 0b1001);
}

#[test]
fn test_mask_intersects_and_empty() {
    let terrain = ViewBlockingMask::from_layers(&[1]);
    let props = ViewBlockingMask::from_layers(&[2]);

    assert!(ViewBlockingMask::ALL.intersects(terrain));
    assert!(!terrain.intersects(props));
    assert!(ViewBlockingMask::NONE.is_empty());
    assert!(!terrain.is_empty());
}

// ============================================================================
// NoObstruction
// ============================================================================

#[test]
fn test_no_obstruction_never_hits() {
    let resolver = NoObstruction;
    let hit = resolver.cast_view_ray(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), ViewBlockingMask::ALL);
    assert!(hit.is_none());
}
