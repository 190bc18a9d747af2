//! Frame-coherent keyboard state tracker.
//!
//! [`KeyboardState`] accumulates winit [`KeyEvent`]s during a frame and
//! answers three questions for any key: is it held, did it go down this
//! frame, and did it come up this frame.
//!
//! Physical key codes are used throughout so the orbit controls sit in the
//! same place regardless of the user's keyboard layout.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key transition for processing.
#[derive(Debug, Clone, Copy)]
pub struct KeyInput {
    /// The physical key involved.
    pub code: KeyCode,
    /// Whether the key went down or up.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat event.
    pub repeat: bool,
}

impl KeyInput {
    /// A non-repeat press of `code`.
    #[must_use]
    pub fn pressed(code: KeyCode) -> Self {
        Self {
            code,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    /// A release of `code`.
    #[must_use]
    pub fn released(code: KeyCode) -> Self {
        Self {
            code,
            state: ElementState::Released,
            repeat: false,
        }
    }
}

/// Tracks which keys are held, with per-frame press/release edges.
///
/// # Usage
///
/// 1. Forward every [`KeyEvent`] to [`handle_event`](Self::handle_event).
/// 2. Query state with [`is_held`](Self::is_held),
///    [`was_pressed`](Self::was_pressed), [`was_released`](Self::was_released).
/// 3. Call [`end_frame`](Self::end_frame) once the frame's queries are done.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
    released_this_frame: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Creates a new `KeyboardState` with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`], updating internal state.
    ///
    /// Keys the platform cannot map to a [`KeyCode`] are ignored, as are OS
    /// auto-repeat events.
    pub fn handle_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.apply(KeyInput {
                code,
                state: event.state,
                repeat: event.repeat,
            });
        }
    }

    /// Applies a [`KeyInput`] (platform-independent, test-friendly).
    ///
    /// Edges fire only on real transitions: a duplicate press of an
    /// already-held key or a release of an unheld key changes nothing.
    pub fn apply(&mut self, input: KeyInput) {
        if input.repeat {
            return;
        }
        match input.state {
            ElementState::Pressed => {
                if self.held.insert(input.code) {
                    self.pressed_this_frame.insert(input.code);
                }
            }
            ElementState::Released => {
                if self.held.remove(&input.code) {
                    self.released_this_frame.insert(input.code);
                }
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    /// Returns `true` only during the frame the key went down.
    #[must_use]
    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.pressed_this_frame.contains(&code)
    }

    /// Returns `true` only during the frame the key came up.
    #[must_use]
    pub fn was_released(&self, code: KeyCode) -> bool {
        self.released_this_frame.contains(&code)
    }

    /// Clears the per-frame press/release edges. Call at end of frame.
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }
}
