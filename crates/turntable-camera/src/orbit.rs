//! Orbital camera state: spherical angles and radius around the world origin.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};
use turntable_input::{Action, ActionState};

/// Hard floor for the orbit radius. No tuning can bring the camera closer
/// to the origin than this, which keeps the view basis well defined.
pub const RADIUS_EPSILON: f32 = 1e-3;

/// Squared-length threshold below which `world_up × forward` is treated as
/// degenerate (camera at a pole).
const POLE_EPSILON: f32 = 1e-8;

/// Speed and range settings for an [`OrbitCamera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitTuning {
    /// Orbit angular speed in radians per second.
    pub orbit_speed: f32,
    /// Zoom speed in world units per second.
    pub zoom_speed: f32,
    /// Closest allowed distance from the origin.
    pub radius_min: f32,
    /// Farthest allowed distance from the origin.
    pub radius_max: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            orbit_speed: 1.5,
            zoom_speed: 3.0,
            radius_min: 1.0,
            radius_max: 50.0,
        }
    }
}

impl OrbitTuning {
    /// The tuning with its radius range forced sane:
    /// `RADIUS_EPSILON <= radius_min <= radius_max`.
    fn sanitized(self) -> Self {
        let radius_min = self.radius_min.max(RADIUS_EPSILON);
        let radius_max = self.radius_max.max(radius_min);
        Self {
            radius_min,
            radius_max,
            ..self
        }
    }
}

/// Orbital camera state around the world origin.
///
/// Position is a pure function of `(radius, theta, phi)` and is never stored
/// or set independently. [`advance`](Self::advance) applies one frame of
/// input; everything else is derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    theta: f32,
    phi: f32,
    radius: f32,
    tuning: OrbitTuning,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(5.0, OrbitTuning::default())
    }
}

impl OrbitCamera {
    /// Creates a camera at `theta = 0`, `phi = 0` on the positive Z axis,
    /// with `radius` clamped into the tuning's range.
    #[must_use]
    pub fn new(radius: f32, tuning: OrbitTuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            theta: 0.0,
            phi: 0.0,
            radius: radius.clamp(tuning.radius_min, tuning.radius_max),
            tuning,
        }
    }

    /// Horizontal orbit angle in radians.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Elevation angle in radians, wrapped to `(-π, π]`.
    #[must_use]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Distance from the origin, within the tuning's radius range.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The active tuning.
    #[must_use]
    pub fn tuning(&self) -> &OrbitTuning {
        &self.tuning
    }

    /// Applies one frame of input.
    ///
    /// Each active action moves its angle or the radius by exactly
    /// `speed * dt`, so opposing actions cancel. `phi` wraps into `(-π, π]`
    /// by a single ±2π step; a jump of more than a full turn in one call
    /// is not normalized further. The radius is clamped to its range.
    pub fn advance(&mut self, actions: &ActionState, dt: f32) {
        debug_assert!(dt >= 0.0, "dt must be non-negative");

        let orbit_step = self.tuning.orbit_speed * dt;
        if actions.is_active(Action::OrbitLeft) {
            self.theta -= orbit_step;
        }
        if actions.is_active(Action::OrbitRight) {
            self.theta += orbit_step;
        }
        if actions.is_active(Action::OrbitUp) {
            self.phi += orbit_step;
        }
        if actions.is_active(Action::OrbitDown) {
            self.phi -= orbit_step;
        }

        if self.phi > PI {
            self.phi -= TAU;
        }
        if self.phi <= -PI {
            self.phi += TAU;
        }

        let zoom_step = self.tuning.zoom_speed * dt;
        if actions.is_active(Action::ZoomIn) {
            self.radius -= zoom_step;
        }
        if actions.is_active(Action::ZoomOut) {
            self.radius += zoom_step;
        }
        self.radius = self
            .radius
            .clamp(self.tuning.radius_min, self.tuning.radius_max);
    }

    /// Cartesian position derived from `(radius, theta, phi)`.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vec3::new(
            self.radius * cos_phi * sin_theta,
            self.radius * sin_phi,
            self.radius * cos_phi * cos_theta,
        )
    }

    /// Unit vector from the camera toward the origin.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (-self.position()).normalize()
    }

    /// Right vector of the orbit frame: `world_up × forward`, normalized.
    ///
    /// At the poles the cross product vanishes; the fallback is its limit as
    /// `phi` approaches ±π/2 from the upright side, so the basis stays
    /// continuous through a pole crossing.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let cross = Vec3::Y.cross(self.forward());
        if cross.length_squared() < POLE_EPSILON {
            Vec3::new(-self.theta.cos(), 0.0, self.theta.sin())
        } else {
            cross.normalize()
        }
    }

    /// Up vector: `forward × right`, orthonormal with the other two.
    ///
    /// Re-derived on every query rather than stored, so it can never drift
    /// out of sync with the view direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.forward().cross(self.right())
    }

    /// World-to-camera transform looking at the origin.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), Vec3::ZERO, self.up())
    }
}
