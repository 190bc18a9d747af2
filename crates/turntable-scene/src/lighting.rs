//! Scene light flag.

/// On/off state of the scene light.
///
/// The renderer reads this as a shader flag each frame; the input wiring
/// flips it on the toggle action's press edge, so holding the key does not
/// flicker the light. Starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingState {
    /// Whether the light is on.
    pub enabled: bool,
}

impl Default for LightingState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl LightingState {
    /// Flip the light on or off.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// The flag as the integer a shader uniform consumes: 1 on, 0 off.
    #[must_use]
    pub fn flag(&self) -> u32 {
        u32::from(self.enabled)
    }
}
