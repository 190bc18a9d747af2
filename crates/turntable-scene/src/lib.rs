//! Static scene layout for the turntable viewer.
//!
//! The scene is a ground plane with a ring of model instances standing on
//! it, all looking outward from the center, lit by a single toggleable
//! light. This crate produces the pure data for that layout (model
//! matrices plus mesh and texel buffers) and the light's on/off flag, and
//! leaves uploading and drawing to whatever renderer embeds it.

mod layout;
mod lighting;
mod mesh;
mod texture;

pub use layout::ring_transforms;
pub use lighting::LightingState;
pub use mesh::{PlaneMesh, Vertex, ground_plane};
pub use texture::{GROUND_GREEN, TexelBuffer, checkerboard, solid_texel};
