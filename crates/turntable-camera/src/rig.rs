//! Camera rig: the once-per-frame input → state → matrices handoff.

use std::time::Instant;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use turntable_input::ActionState;

use crate::clock::FrameClock;
use crate::orbit::{OrbitCamera, OrbitTuning};
use crate::projection::Perspective;

/// Matrix snapshot produced by [`CameraRig::update`].
///
/// One snapshot per frame: the rig writes it during `update`, the renderer
/// reads it afterwards. Plain `Copy` data, so a frame-paced renderer can
/// also move a copy across threads for a single-writer/single-reader
/// handoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-clip transform.
    pub projection: Mat4,
    /// Camera world position the view matrix was built from.
    pub eye: Vec3,
}

/// Uniform buffer layout for the camera, ready for GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// Combined projection * view matrix, column-major.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world position (w unused).
    pub eye: [f32; 4],
}

/// Owns the orbital camera, its projection, and the frame clock.
///
/// Call [`update`](Self::update) once per frame with the current action
/// snapshot and timestamp; read the resulting matrices through
/// [`view_matrix`](Self::view_matrix) / [`projection_matrix`](Self::projection_matrix)
/// or the combined [`matrices`](Self::matrices) snapshot.
#[derive(Debug, Clone)]
pub struct CameraRig {
    camera: OrbitCamera,
    projection: Perspective,
    clock: FrameClock,
    matrices: CameraMatrices,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(OrbitCamera::default(), Perspective::default())
    }
}

impl CameraRig {
    /// Creates a rig from a camera and projection. The matrix snapshot is
    /// valid immediately, before the first update.
    #[must_use]
    pub fn new(camera: OrbitCamera, projection: Perspective) -> Self {
        let matrices = CameraMatrices {
            view: camera.view_matrix(),
            projection: projection.matrix(),
            eye: camera.position(),
        };
        Self {
            camera,
            projection,
            clock: FrameClock::new(),
            matrices,
        }
    }

    /// Creates a rig at `start_radius` with the given tuning and projection.
    #[must_use]
    pub fn with_tuning(start_radius: f32, tuning: OrbitTuning, projection: Perspective) -> Self {
        Self::new(OrbitCamera::new(start_radius, tuning), projection)
    }

    /// Runs one frame: computes the delta time from `now`, advances the
    /// camera by the active actions, and refreshes the matrix snapshot.
    ///
    /// The first call establishes the clock baseline, so it produces no
    /// motion regardless of the actions held.
    pub fn update(&mut self, actions: &ActionState, now: Instant) {
        let dt = self.clock.advance(now);
        self.camera.advance(actions, dt);
        self.refresh_matrices();
    }

    /// Current view matrix (world-to-camera).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.matrices.view
    }

    /// Current projection matrix (camera-to-clip).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.matrices.projection
    }

    /// The full per-frame matrix snapshot.
    #[must_use]
    pub fn matrices(&self) -> &CameraMatrices {
        &self.matrices
    }

    /// The camera state behind the rig.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The projection parameters behind the rig.
    #[must_use]
    pub fn projection(&self) -> &Perspective {
        &self.projection
    }

    /// Update the projection aspect ratio from a window size and refresh
    /// the snapshot.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.projection.set_aspect(width, height);
        self.refresh_matrices();
    }

    /// Convert the current snapshot to a uniform suitable for GPU upload.
    #[must_use]
    pub fn to_uniform(&self) -> CameraUniform {
        let eye = self.matrices.eye;
        CameraUniform {
            view_proj: (self.matrices.projection * self.matrices.view).to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 0.0],
        }
    }

    fn refresh_matrices(&mut self) {
        self.matrices = CameraMatrices {
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(),
            eye: self.camera.position(),
        };
    }
}
