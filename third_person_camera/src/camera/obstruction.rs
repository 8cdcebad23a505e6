/// View obstruction - keeping geometry from getting between camera and target.
///
/// The camera crate owns no collision world. Hosts that have one implement
/// [`ViewObstructionResolver`] and hand it to
/// `OrbitCamera::compute_unobstructed_transform`, which pulls the camera in
/// front of whatever the ray hits. The camera's [`ViewBlockingMask`] is
/// passed along so the host can filter which layers count as blocking.

use glam::Vec3;

/// Bitmask of collision layers that block the camera's view.
///
/// Bit `n` stands for layer `n` (0-based). The default covers the low 31
/// layers, which is every layer a typical physics engine exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewBlockingMask(pub i64);

impl ViewBlockingMask {
    /// Every layer 0..=30
    pub const ALL: Self = Self(2_147_483_647);

    /// Nothing blocks the view
    pub const NONE: Self = Self(0);

    /// Build a mask from 0-based layer indices. Indices >= 64 are ignored.
    pub fn from_layers(layers: &[u32]) -> Self {
        let bits = layers
            .iter()
            .filter(|&&layer| layer < 64)
            .fold(0_i64, |bits, &layer| bits | (1_i64 << layer));
        Self(bits)
    }

    /// Whether the given 0-based layer is part of the mask
    pub fn contains_layer(&self, layer: u32) -> bool {
        layer < 64 && (self.0 >> layer) & 1 == 1
    }

    /// Whether two masks share at least one layer
    pub fn intersects(&self, other: ViewBlockingMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether no layer is set
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ViewBlockingMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Where a view ray hit blocking geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstructionHit {
    /// World-space hit point
    pub position: Vec3,
    /// World-space surface normal at the hit point
    pub normal: Vec3,
}

/// Host-side collision query used to keep the target visible.
pub trait ViewObstructionResolver {
    /// Cast a ray from `from` (the orbit pivot) to `to` (the desired camera
    /// origin) against geometry on the layers in `mask`.
    ///
    /// Returns the first hit, or `None` if the segment is clear.
    fn cast_view_ray(&self, from: Vec3, to: Vec3, mask: ViewBlockingMask) -> Option<ObstructionHit>;
}

/// Resolver for hosts without collision: the view is never blocked.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstruction;

impl ViewObstructionResolver for NoObstruction {
    fn cast_view_ray(&self, _from: Vec3, _to: Vec3, _mask: ViewBlockingMask) -> Option<ObstructionHit> {
        None
    }
}

#[cfg(test)]
#[path = "obstruction_tests.rs"]
mod tests;
