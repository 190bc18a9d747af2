//! Instance placement: an evenly spaced ring of outward-facing models.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3};

/// Model matrices for `count` instances on a circle of `ring_radius` in the
/// ground plane, each raised by `lift`.
///
/// Instance `i` sits at angle `TAU * i / count`, measured in the XZ plane,
/// and is rotated about +Y so its local +Z axis points radially outward.
#[must_use]
pub fn ring_transforms(count: u32, ring_radius: f32, lift: f32) -> Vec<Mat4> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            let position = Vec3::new(ring_radius * angle.cos(), lift, ring_radius * angle.sin());
            // from_rotation_y maps +Z to (sin b, 0, cos b); b = π/2 - angle
            // makes that the radial direction at `angle`.
            Mat4::from_translation(position) * Mat4::from_rotation_y(FRAC_PI_2 - angle)
        })
        .collect()
}
