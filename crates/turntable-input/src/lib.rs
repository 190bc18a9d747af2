//! Keyboard input handling for the turntable viewer.
//!
//! Turns raw winit keyboard events into the viewer's logical actions, the
//! orbit and zoom controls plus the light toggle, through a user-editable
//! binding table. No window is required: whatever event loop embeds the
//! viewer forwards its [`winit::event::KeyEvent`]s, and tests or scripted
//! playback synthesize [`KeyInput`]s directly.

mod action_state;
mod bindings;
mod keyboard;

pub use action_state::ActionState;
pub use bindings::{Action, Bindings, BindingsError, Conflict};
pub use keyboard::{KeyInput, KeyboardState};
