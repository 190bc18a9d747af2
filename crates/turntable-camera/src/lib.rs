//! Orbital camera for the turntable viewer.
//!
//! The camera rides a sphere around the world origin: two angles and a
//! radius, advanced once per frame by the logical orbit and zoom actions,
//! and from those a look-at view matrix and a perspective projection matrix
//! for whatever renderer consumes them.
//!
//! State lives in owned objects. Input arrives as an
//! [`ActionState`](turntable_input::ActionState) snapshot and timestamps
//! are passed in explicitly, so any frame sequence can be replayed
//! deterministically in tests.

mod clock;
mod orbit;
mod projection;
mod rig;

pub use clock::FrameClock;
pub use orbit::{OrbitCamera, OrbitTuning, RADIUS_EPSILON};
pub use projection::Perspective;
pub use rig::{CameraMatrices, CameraRig, CameraUniform};
