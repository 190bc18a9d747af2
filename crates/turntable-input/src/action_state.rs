//! Per-frame snapshot of which actions are active.

use crate::bindings::{Action, Bindings};
use crate::keyboard::KeyboardState;

/// Which actions are active this frame, and which just became active.
///
/// This is the only input type the camera update consumes; edge-triggered
/// consumers such as the light toggle read [`ActionState::was_pressed`]
/// instead of the held flag. In the live pipeline it is captured once per
/// frame from [`Bindings`] and [`KeyboardState`]; scripted playback and
/// tests construct it directly with [`ActionState::holding`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    active: [bool; Action::COUNT],
    pressed: [bool; Action::COUNT],
}

impl ActionState {
    /// A snapshot with no actions active.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A snapshot with exactly the given actions active.
    #[must_use]
    pub fn holding(actions: &[Action]) -> Self {
        let mut state = Self::default();
        for &action in actions {
            state.active[action.index()] = true;
        }
        state
    }

    /// Resolve every action from the keys currently held.
    ///
    /// An action is active while any of its bound keys is held, and counts
    /// as pressed on the frame any of its bound keys went down.
    #[must_use]
    pub fn capture(bindings: &Bindings, keyboard: &KeyboardState) -> Self {
        let mut state = Self::default();
        for action in Action::ALL {
            let keys = bindings.bound_keys(action);
            state.active[action.index()] = keys.iter().any(|&code| keyboard.is_held(code));
            state.pressed[action.index()] = keys.iter().any(|&code| keyboard.was_pressed(code));
        }
        state
    }

    /// Whether `action` is active this frame.
    #[must_use]
    pub fn is_active(&self, action: Action) -> bool {
        self.active[action.index()]
    }

    /// Whether `action` became active this frame.
    ///
    /// True only on the press edge: a key held across frames keeps the
    /// action active but does not report it as pressed again, which is what
    /// lets a toggle fire once per physical press.
    #[must_use]
    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    /// The actions active this frame, in declaration order.
    pub fn active_actions(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(|a| self.active[a.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::KeyInput;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_none_has_nothing_active() {
        let state = ActionState::none();
        for action in Action::ALL {
            assert!(!state.is_active(action));
        }
    }

    #[test]
    fn test_holding_sets_exactly_those_actions() {
        let state = ActionState::holding(&[Action::OrbitRight, Action::ZoomIn]);
        assert!(state.is_active(Action::OrbitRight));
        assert!(state.is_active(Action::ZoomIn));
        assert!(!state.is_active(Action::OrbitLeft));
        assert!(!state.is_active(Action::ZoomOut));
    }

    #[test]
    fn test_capture_resolves_default_layout() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        kb.apply(KeyInput::pressed(KeyCode::KeyA));
        kb.apply(KeyInput::pressed(KeyCode::ArrowDown));

        let state = ActionState::capture(&bindings, &kb);
        assert!(state.is_active(Action::OrbitLeft));
        assert!(state.is_active(Action::OrbitDown));
        assert!(!state.is_active(Action::OrbitRight));
        assert!(!state.is_active(Action::ZoomIn));
    }

    #[test]
    fn test_capture_follows_rebinds() {
        let mut bindings = Bindings::default();
        bindings.set_keys(Action::ZoomIn, vec![KeyCode::PageUp]);

        let mut kb = KeyboardState::new();
        kb.apply(KeyInput::pressed(KeyCode::KeyW));
        let state = ActionState::capture(&bindings, &kb);
        // W no longer zooms after the rebind
        assert!(!state.is_active(Action::ZoomIn));

        kb.apply(KeyInput::pressed(KeyCode::PageUp));
        let state = ActionState::capture(&bindings, &kb);
        assert!(state.is_active(Action::ZoomIn));
    }

    #[test]
    fn test_capture_any_of_several_keys() {
        let mut bindings = Bindings::default();
        bindings.set_keys(Action::OrbitUp, vec![KeyCode::ArrowUp, KeyCode::KeyI]);

        let mut kb = KeyboardState::new();
        kb.apply(KeyInput::pressed(KeyCode::KeyI));
        let state = ActionState::capture(&bindings, &kb);
        assert!(state.is_active(Action::OrbitUp));
    }

    #[test]
    fn test_capture_with_empty_bindings_is_inert() {
        let bindings = Bindings::new();
        let mut kb = KeyboardState::new();
        kb.apply(KeyInput::pressed(KeyCode::KeyW));
        let state = ActionState::capture(&bindings, &kb);
        assert_eq!(state, ActionState::none());
    }

    #[test]
    fn test_capture_marks_pressed_on_the_press_edge() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        kb.apply(KeyInput::pressed(KeyCode::KeyL));

        let state = ActionState::capture(&bindings, &kb);
        assert!(state.is_active(Action::ToggleLight));
        assert!(state.was_pressed(Action::ToggleLight));
        assert!(!state.was_pressed(Action::OrbitLeft));
    }

    #[test]
    fn test_held_key_stays_active_but_not_pressed() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        kb.apply(KeyInput::pressed(KeyCode::KeyL));
        kb.end_frame();

        let state = ActionState::capture(&bindings, &kb);
        assert!(state.is_active(Action::ToggleLight));
        assert!(!state.was_pressed(Action::ToggleLight));
    }

    #[test]
    fn test_toggle_action_fires_once_per_press() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        let mut edges = 0;

        kb.apply(KeyInput::pressed(KeyCode::KeyL));
        for _ in 0..10 {
            if ActionState::capture(&bindings, &kb).was_pressed(Action::ToggleLight) {
                edges += 1;
            }
            kb.end_frame();
        }
        assert_eq!(edges, 1, "holding must not re-press");

        kb.apply(KeyInput::released(KeyCode::KeyL));
        kb.end_frame();
        kb.apply(KeyInput::pressed(KeyCode::KeyL));
        assert!(ActionState::capture(&bindings, &kb).was_pressed(Action::ToggleLight));

        // Scripted snapshots hold actions without a press edge.
        assert!(!ActionState::holding(&[Action::ToggleLight]).was_pressed(Action::ToggleLight));
    }

    #[test]
    fn test_opposing_actions_can_both_be_active() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        kb.apply(KeyInput::pressed(KeyCode::KeyA));
        kb.apply(KeyInput::pressed(KeyCode::KeyD));

        let state = ActionState::capture(&bindings, &kb);
        assert!(state.is_active(Action::OrbitLeft));
        assert!(state.is_active(Action::OrbitRight));
    }

    #[test]
    fn test_active_actions_iterates_in_order() {
        let state = ActionState::holding(&[Action::ZoomOut, Action::OrbitLeft]);
        let active: Vec<Action> = state.active_actions().collect();
        assert_eq!(active, vec![Action::OrbitLeft, Action::ZoomOut]);
    }
}
